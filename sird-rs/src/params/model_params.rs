use super::{BASIC_REPRODUCTION_NUMBER, INFECTIOUS_PERIOD, MORTALITY};
use crate::{
    error::{check_fraction, check_positive, InvalidParameterError},
    prelude::Real,
};
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// Scalar epidemiological parameters of the SIRD model.
#[derive(CopyGetters, Setters, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[getset(get_copy = "pub", set = "pub")]
#[serde(default)]
pub struct ModelParameters {
    /// Basic reproduction number R0.
    r0: Real,

    /// Mean duration of the infectious period, in periods.
    infectious_period: Real,

    /// Fatality fraction among removed individuals.
    mortality: Real,
}

impl ModelParameters {
    pub fn new(r0: Real, infectious_period: Real, mortality: Real) -> Self {
        ModelParameters {
            r0,
            infectious_period,
            mortality,
        }
    }

    /// Contact rate, R0 / Tinf.
    pub fn beta(&self) -> Real {
        self.r0 / self.infectious_period
    }

    /// Recovery rate, 1 / Tinf.
    pub fn gamma(&self) -> Real {
        1.0 / self.infectious_period
    }

    /// Death rate, mortality / Tinf.
    pub fn pi(&self) -> Real {
        self.mortality / self.infectious_period
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        check_positive("R0", self.r0)?;
        check_positive("infectious period", self.infectious_period)?;
        check_fraction("mortality", self.mortality)
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelParameters::new(BASIC_REPRODUCTION_NUMBER, INFECTIOUS_PERIOD, MORTALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn derived_rates() {
        let params = ModelParameters::new(2.5, 7.0, 0.01);
        assert_approx_eq!(params.beta(), 2.5 / 7.0);
        assert_approx_eq!(params.gamma(), 1.0 / 7.0);
        assert_approx_eq!(params.pi(), 0.01 / 7.0);
        assert_approx_eq!(params.beta() / params.gamma(), 2.5);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(ModelParameters::default().validate().is_ok());
        assert!(ModelParameters::new(0.0, 7.0, 0.01).validate().is_err());
        assert!(ModelParameters::new(2.5, -1.0, 0.01).validate().is_err());
        assert!(ModelParameters::new(2.5, 7.0, 1.01).validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let params = ModelParameters::new(3.0, 5.0, 0.02);
        let data = toml::to_string(&params).unwrap();
        let params_: ModelParameters = toml::from_str(&data).unwrap();
        assert_eq!(params, params_);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let params: ModelParameters = toml::from_str("r0 = 1.5").unwrap();
        assert_eq!(params.r0(), 1.5);
        assert_eq!(params.infectious_period(), INFECTIOUS_PERIOD);
        assert_eq!(params.mortality(), MORTALITY);
    }
}
