use super::TimeSeries;
use crate::{
    epidemic::Rates,
    error::InvalidParameterError,
    models::{Compartment, SIRD},
    params::{InterventionWindow, ModelParameters, NORMALIZATION_TOLERANCE},
    prelude::Time,
};
use log::*;

/// Run the model for `horizon` periods starting from `initial`.
///
/// Each period is advanced by a unit forward-Euler step. The reduction used in
/// period t is read from the window membership of t alone. Entry t+1 of the
/// reproduction number history reflects the reduction applied during period t,
/// while entry 0 is always R0.
pub fn run(
    initial: SIRD,
    horizon: Time,
    params: &ModelParameters,
    window: &InterventionWindow,
) -> Result<TimeSeries, InvalidParameterError> {
    validate(&initial, horizon, params, window)?;
    info!(
        "run: horizon={}, R0={}, Tinf={}, mortality={}, window={:?}",
        horizon,
        params.r0(),
        params.infectious_period(),
        params.mortality(),
        window
    );

    let rates = Rates::from(params);
    let mut series = TimeSeries::with_capacity(horizon as usize);
    series.push(initial, rates.reproduction_number(0.0));

    let mut state = initial;
    for t in 0..horizon - 1 {
        let reduction = window.reduction_at(t);
        state = state + rates.derivative(&state, reduction);
        series.push(state, rates.reproduction_number(reduction));
        trace!("step [{}]: {:?}, reduction = {}", t + 1, state, reduction);
    }

    let (peak, value) = series.peak_infections();
    info!(
        "run finished: infection peak {:.4} at t={}, final deaths {:.6}",
        value,
        peak,
        series.final_state().dead
    );
    Ok(series)
}

fn validate(
    initial: &SIRD,
    horizon: Time,
    params: &ModelParameters,
    window: &InterventionWindow,
) -> Result<(), InvalidParameterError> {
    if horizon < 1 {
        return Err(InvalidParameterError::EmptyHorizon);
    }
    params.validate()?;
    window.validate()?;

    for c in Compartment::ALL.iter() {
        let value = initial[*c];
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidParameterError::NegativeCompartment {
                what: c.name(),
                value,
            });
        }
    }
    let total = initial.total();
    if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
        return Err(InvalidParameterError::NotNormalized { total });
    }
    if window.is_empty() {
        debug!("intervention window {:?} is empty", window);
    }
    Ok(())
}
