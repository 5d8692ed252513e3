use crate::prelude::Real;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violated at the simulation boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    #[error("horizon must contain at least one period")]
    EmptyHorizon,

    #[error("{what} must be positive and finite, got {value}")]
    NotPositive { what: &'static str, value: Real },

    #[error("{what} must lie in [0, 1], got {value}")]
    NotAFraction { what: &'static str, value: Real },

    #[error("compartment {what} must be finite and non-negative, got {value}")]
    NegativeCompartment { what: &'static str, value: Real },

    #[error("initial compartments must sum to 1, got {total}")]
    NotNormalized { total: Real },
}

/// Crate-level error used by the driver and configuration layers.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("duplicate scenario name: {0}")]
    DuplicateScenario(String),
}

/// Fails with NotPositive unless value is strictly positive and finite.
pub(crate) fn check_positive(
    what: &'static str,
    value: Real,
) -> std::result::Result<(), InvalidParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidParameterError::NotPositive { what, value })
    }
}

/// Fails with NotAFraction unless value is in the closed unit interval.
pub(crate) fn check_fraction(
    what: &'static str,
    value: Real,
) -> std::result::Result<(), InvalidParameterError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InvalidParameterError::NotAFraction { what, value })
    }
}
