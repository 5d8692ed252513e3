use super::TimeSeries;
use crate::prelude::Real;
use getset::Getters;

/// Period-by-period comparison of the Dead curves of two runs.
#[derive(Getters, Debug, Clone, PartialEq)]
#[getset(get = "pub")]
pub struct DeathComparison {
    baseline: Vec<Real>,
    alternative: Vec<Real>,
}

impl DeathComparison {
    /// Compare the death curve of `alternative` against `baseline`. Only the
    /// periods covered by both runs are kept.
    pub fn new(baseline: &TimeSeries, alternative: &TimeSeries) -> Self {
        let n = baseline.len().min(alternative.len());
        let mut baseline = baseline.dead_curve();
        let mut alternative = alternative.dead_curve();
        baseline.truncate(n);
        alternative.truncate(n);
        DeathComparison {
            baseline,
            alternative,
        }
    }

    /// Cumulative deaths avoided (positive) or added (negative) at each period.
    pub fn averted(&self) -> Vec<Real> {
        self.baseline
            .iter()
            .zip(&self.alternative)
            .map(|(b, a)| b - a)
            .collect()
    }

    /// Deaths averted by the end of the common horizon.
    pub fn total_averted(&self) -> Real {
        self.averted().last().cloned().unwrap_or(0.0)
    }

    /// Averted deaths relative to the baseline total.
    pub fn relative_averted(&self) -> Real {
        match self.baseline.last() {
            Some(&total) if total > 0.0 => self.total_averted() / total,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn lockdown_averts_deaths() {
        let params = ModelParameters::default();
        let x0: SIRD = crate::params::INITIAL_STATE.into();
        let free = run(x0, 200, &params, &InterventionWindow::none()).unwrap();
        let locked = run(x0, 200, &params, &InterventionWindow::lockdown()).unwrap();
        let cmp = DeathComparison::new(&free, &locked);

        assert_eq!(cmp.averted().len(), 200);
        assert!(cmp.averted()[..=11].iter().all(|&x| x == 0.0));
        assert!(cmp.total_averted() > 0.0);
        assert_approx_eq!(
            cmp.total_averted(),
            free.final_state().dead - locked.final_state().dead
        );
        assert!(cmp.relative_averted() > 0.0 && cmp.relative_averted() < 1.0);
    }

    #[test]
    fn uses_common_horizon() {
        let params = ModelParameters::default();
        let x0: SIRD = crate::params::INITIAL_STATE.into();
        let long = run(x0, 50, &params, &InterventionWindow::none()).unwrap();
        let short = run(x0, 20, &params, &InterventionWindow::none()).unwrap();
        let cmp = DeathComparison::new(&long, &short);
        assert_eq!(cmp.baseline().len(), 20);
        assert_eq!(cmp.total_averted(), 0.0);
    }
}
