//! Visual weights of the yes/no controls
//!
//! Each decline makes "yes" bigger and "no" smaller. The "no" weight is
//! floored so the control never collapses.

use crate::{InquiryError, Result};
use serde::{Deserialize, Serialize};

/// Step sizes and floor applied on every decline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightTuning {
    /// Added to the affirmative weight per decline
    pub affirmative_step: f64,
    /// Subtracted from the negative weight per decline
    pub negative_step: f64,
    /// Lowest value the negative weight can reach
    pub negative_floor: f64,
}

impl Default for WeightTuning {
    fn default() -> Self {
        Self {
            affirmative_step: 0.3,
            negative_step: 0.1,
            negative_floor: 0.3,
        }
    }
}

impl WeightTuning {
    /// Validate step sizes and floor
    pub fn validate(&self) -> Result<()> {
        if !self.affirmative_step.is_finite() || self.affirmative_step < 0.0 {
            return Err(InquiryError::ConfigError(
                "Affirmative step must be a non-negative number".to_string(),
            ));
        }

        if !self.negative_step.is_finite() || self.negative_step < 0.0 {
            return Err(InquiryError::ConfigError(
                "Negative step must be a non-negative number".to_string(),
            ));
        }

        if !(self.negative_floor > 0.0 && self.negative_floor <= VisualWeights::INITIAL) {
            return Err(InquiryError::ConfigError(format!(
                "Negative floor must be in (0, {}]",
                VisualWeights::INITIAL
            )));
        }

        Ok(())
    }
}

/// Scale factors for the affirmative and negative controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualWeights {
    pub affirmative: f64,
    pub negative: f64,
}

impl Default for VisualWeights {
    fn default() -> Self {
        Self {
            affirmative: Self::INITIAL,
            negative: Self::INITIAL,
        }
    }
}

impl VisualWeights {
    /// Starting scale of both controls
    pub const INITIAL: f64 = 1.0;

    /// Weights after `declines` presses of the negative control.
    ///
    /// Computed from the count rather than accumulated so repeated
    /// presses do not drift.
    pub fn after_declines(declines: u32, tuning: &WeightTuning) -> Self {
        let n = f64::from(declines);
        Self {
            affirmative: Self::INITIAL + n * tuning.affirmative_step,
            negative: (Self::INITIAL - n * tuning.negative_step).max(tuning.negative_floor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_initial_weights() {
        let w = VisualWeights::after_declines(0, &WeightTuning::default());
        assert_eq!(w, VisualWeights::default());
    }

    #[test]
    fn test_weights_follow_closed_form() {
        let tuning = WeightTuning::default();
        for n in 0..40u32 {
            let w = VisualWeights::after_declines(n, &tuning);
            let expected_yes = 1.0 + f64::from(n) * 0.3;
            let expected_no = (1.0 - f64::from(n) * 0.1).max(0.3);
            assert!((w.affirmative - expected_yes).abs() < EPS, "n = {}", n);
            assert!((w.negative - expected_no).abs() < EPS, "n = {}", n);
            assert!(w.negative >= tuning.negative_floor);
        }
    }

    #[test]
    fn test_negative_weight_hits_floor() {
        let tuning = WeightTuning::default();
        let w = VisualWeights::after_declines(7, &tuning);
        assert!((w.negative - 0.3).abs() < EPS);
        let w = VisualWeights::after_declines(1_000, &tuning);
        assert!((w.negative - 0.3).abs() < EPS);
        assert!((w.affirmative - 301.0).abs() < 1e-6);
    }

    #[test]
    fn test_tuning_validation() {
        assert!(WeightTuning::default().validate().is_ok());

        let zero_floor = WeightTuning {
            negative_floor: 0.0,
            ..WeightTuning::default()
        };
        assert!(zero_floor.validate().is_err());

        let negative_step = WeightTuning {
            affirmative_step: -0.1,
            ..WeightTuning::default()
        };
        assert!(negative_step.validate().is_err());

        let high_floor = WeightTuning {
            negative_floor: 1.5,
            ..WeightTuning::default()
        };
        assert!(high_floor.validate().is_err());
    }
}
