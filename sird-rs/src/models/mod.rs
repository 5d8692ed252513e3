mod sird;
pub use sird::*;
