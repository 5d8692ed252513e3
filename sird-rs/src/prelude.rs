pub use crate::epidemic::{transition, Rates};
pub use crate::error::{Error, InvalidParameterError, Result};
pub use crate::models::{Compartment, SIRD};
pub use crate::params::{InterventionWindow, ModelParameters};
pub use crate::sim::{run, DeathComparison, Scenario, TimeSeries};

/// Basic representation of time. This crate assumes time is measured in
/// discrete periods (usually days).
pub type Time = u32;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const INF: Real = Real::INFINITY;
