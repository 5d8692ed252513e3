use crate::prelude::{Real, Time};

///////////////////////////////////////////////////////////////////////////////
// Default scenario
///////////////////////////////////////////////////////////////////////////////

pub const BASIC_REPRODUCTION_NUMBER: Real = 2.5;
pub const INFECTIOUS_PERIOD: Real = 7.0;
pub const MORTALITY: Real = 0.01;
pub const HORIZON: Time = 200;
pub const INITIAL_STATE: [Real; 4] = [0.995, 0.005, 0.0, 0.0];

///////////////////////////////////////////////////////////////////////////////
// Default lockdown
///////////////////////////////////////////////////////////////////////////////

pub const LOCKDOWN_START: Time = 10;
pub const LOCKDOWN_END: Time = 50;
pub const LOCKDOWN_REDUCTION: Real = 0.7;

/// Tolerance accepted when checking that initial fractions sum to one.
pub const NORMALIZATION_TOLERANCE: Real = 1e-6;
