use crate::{models::SIRD, params::ModelParameters, prelude::Real};
use getset::CopyGetters;

/// Instantaneous rate of change of each compartment.
///
/// `reduction` is the fractional cut to the contact rate in effect during the
/// current period, zero when no intervention is active. Inputs are not
/// validated. The four components of the result always sum to zero.
#[inline]
pub fn transition(state: &SIRD, beta: Real, gamma: Real, pi: Real, reduction: Real) -> SIRD {
    let infections = beta * (1.0 - reduction) * state.infected * state.susceptible;
    let recoveries = gamma * state.infected;
    let deaths = pi * state.infected;

    SIRD {
        susceptible: -infections,
        infected: infections - recoveries - deaths,
        recovered: recoveries,
        dead: deaths,
    }
}

/// Rates derived from ModelParameters, computed once and held constant during
/// a run.
#[derive(CopyGetters, Debug, PartialEq, Copy, Clone)]
#[getset(get_copy = "pub")]
pub struct Rates {
    /// Contact rate.
    beta: Real,
    /// Recovery rate.
    gamma: Real,
    /// Death rate.
    pi: Real,
}

impl Rates {
    pub fn new(beta: Real, gamma: Real, pi: Real) -> Self {
        Rates { beta, gamma, pi }
    }

    /// Derivative of state under the given contact-rate reduction.
    pub fn derivative(&self, state: &SIRD, reduction: Real) -> SIRD {
        transition(state, self.beta, self.gamma, self.pi, reduction)
    }

    /// Effective reproduction number, beta * (1 - reduction) / gamma.
    pub fn reproduction_number(&self, reduction: Real) -> Real {
        self.beta * (1.0 - reduction) / self.gamma
    }
}

impl From<&ModelParameters> for Rates {
    fn from(params: &ModelParameters) -> Self {
        Rates::new(params.beta(), params.gamma(), params.pi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn rates() -> Rates {
        Rates::from(&ModelParameters::new(2.5, 7.0, 0.01))
    }

    #[test]
    fn derivative_is_conservative() {
        let r = rates();
        let states = [
            SIRD::new(0.995, 0.005, 0.0, 0.0),
            SIRD::new(0.3, 0.4, 0.25, 0.05),
            SIRD::new(0.0, 1.0, 0.0, 0.0),
            SIRD::new(1.0, 0.0, 0.0, 0.0),
        ];
        for state in states.iter() {
            for &reduction in [0.0, 0.3, 0.7, 1.0].iter() {
                assert_approx_eq!(r.derivative(state, reduction).total(), 0.0, 1e-15);
            }
        }
    }

    #[test]
    fn flows() {
        let r = rates();
        let state = SIRD::new(0.8, 0.2, 0.0, 0.0);
        let d = r.derivative(&state, 0.5);
        let infections = (2.5 / 7.0) * 0.5 * 0.2 * 0.8;
        assert_approx_eq!(d.susceptible, -infections);
        assert_approx_eq!(d.infected, infections - (1.01 / 7.0) * 0.2);
        assert_approx_eq!(d.recovered, 0.2 / 7.0);
        assert_approx_eq!(d.dead, 0.01 * 0.2 / 7.0);
    }

    #[test]
    fn full_reduction_stops_infections() {
        let d = rates().derivative(&SIRD::new(0.5, 0.5, 0.0, 0.0), 1.0);
        assert_eq!(d.susceptible, 0.0);
        assert!(d.infected < 0.0);
    }

    #[test]
    fn no_infected_is_stationary() {
        let d = rates().derivative(&SIRD::new(0.7, 0.0, 0.2, 0.1), 0.0);
        assert_eq!(d.as_array(), [0.0; 4]);
    }

    #[test]
    fn reproduction_number() {
        let r = rates();
        assert_approx_eq!(r.reproduction_number(0.0), 2.5);
        assert_approx_eq!(r.reproduction_number(0.7), 0.75);
    }
}
