//! Time stepping, results and scenario orchestration.
mod comparison;
mod driver;
mod scenario;
mod time_series;

pub use comparison::*;
pub use driver::*;
pub use scenario::*;
pub use time_series::*;
