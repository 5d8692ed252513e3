//! Epidemiological parameters and interventions.
//!
//! Parameters are plain serializable values fixed at invocation. Rates
//! derived from them are computed once per run by [`crate::epidemic::Rates`].
mod constants;
mod intervention;
mod model_params;

pub use constants::*;
pub use intervention::*;
pub use model_params::*;
