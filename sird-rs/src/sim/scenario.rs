use super::{run, TimeSeries};
use crate::{
    error::InvalidParameterError,
    params::{InterventionWindow, ModelParameters, HORIZON, INITIAL_STATE},
    prelude::{Real, Time},
};
use getset::{Getters, Setters};
use log::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A named, fully specified model run.
#[derive(Getters, Setters, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct Scenario {
    name: String,
    initial_state: [Real; 4],
    horizon: Time,
    params: ModelParameters,
    intervention: InterventionWindow,
}

impl Scenario {
    pub fn new(name: &str, params: ModelParameters, intervention: InterventionWindow) -> Self {
        Scenario {
            name: name.to_string(),
            initial_state: INITIAL_STATE,
            horizon: HORIZON,
            params,
            intervention,
        }
    }

    /// Default parameters with no intervention.
    pub fn baseline() -> Self {
        Self::new("baseline", ModelParameters::default(), InterventionWindow::none())
    }

    /// Default parameters with the default lockdown.
    pub fn lockdown() -> Self {
        Self::new("lockdown", ModelParameters::default(), InterventionWindow::lockdown())
    }

    pub fn run(&self) -> Result<TimeSeries, InvalidParameterError> {
        debug!("running scenario {}", self.name);
        run(
            self.initial_state.into(),
            self.horizon,
            &self.params,
            &self.intervention,
        )
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Run independent scenarios in parallel. Results keep the input order.
pub fn run_all(scenarios: &[Scenario]) -> Result<Vec<TimeSeries>, InvalidParameterError> {
    scenarios.par_iter().map(Scenario::run).collect()
}
