mod transition;
pub use transition::*;
