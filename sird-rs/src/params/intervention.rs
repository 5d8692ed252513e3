use super::{LOCKDOWN_END, LOCKDOWN_REDUCTION, LOCKDOWN_START};
use crate::{
    error::{check_fraction, InvalidParameterError},
    prelude::{Real, Time},
};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// A contact-rate reduction applied during the inclusive period range
/// [start, end].
///
/// A window with start > end never activates.
#[derive(CopyGetters, Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
#[serde(default)]
pub struct InterventionWindow {
    start: Time,
    end: Time,
    reduction: Real,
}

impl InterventionWindow {
    pub fn new(start: Time, end: Time, reduction: Real) -> Self {
        InterventionWindow {
            start,
            end,
            reduction,
        }
    }

    /// The degenerate window (0, 0, 0), meaning no intervention.
    pub fn none() -> Self {
        Self::default()
    }

    /// Lockdown used by the default comparison scenario.
    pub fn lockdown() -> Self {
        Self::new(LOCKDOWN_START, LOCKDOWN_END, LOCKDOWN_REDUCTION)
    }

    /// True if the window covers no period at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// True if period t lies inside the window.
    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t <= self.end
    }

    /// Reduction in effect at period t; exactly zero outside the window.
    pub fn reduction_at(&self, t: Time) -> Real {
        if self.contains(t) {
            self.reduction
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        check_fraction("reduction effect", self.reduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        let w = InterventionWindow::new(10, 50, 0.7);
        assert_eq!(w.reduction_at(9), 0.0);
        assert_eq!(w.reduction_at(10), 0.7);
        assert_eq!(w.reduction_at(30), 0.7);
        assert_eq!(w.reduction_at(50), 0.7);
        assert_eq!(w.reduction_at(51), 0.0);
    }

    #[test]
    fn reversed_window_is_empty() {
        let w = InterventionWindow::new(5, 2, 0.7);
        assert!(w.is_empty());
        assert!((0..20).all(|t| w.reduction_at(t) == 0.0));
    }

    #[test]
    fn no_intervention_has_zero_reduction() {
        let w = InterventionWindow::none();
        assert!(!w.is_empty());
        assert!(w.contains(0));
        assert_eq!(w.reduction_at(0), 0.0);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn reduction_must_be_fraction() {
        assert!(InterventionWindow::new(0, 1, -0.1).validate().is_err());
        assert!(InterventionWindow::new(0, 1, 1.0).validate().is_ok());
    }
}
