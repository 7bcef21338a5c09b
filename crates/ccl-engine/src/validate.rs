//! Input guards and the soft validation verdict.
//!
//! The engine draws a hard line between malformed inputs and statistically
//! unfavorable results: the former are [`EngineError`]s raised at the point
//! of computation, the latter are recorded in a [`ValidationVerdict`] and
//! left for the caller to act on.

use ccl_types::{EpistemicConfig, Measurement};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tension threshold used by the reference deployment, in σ.
pub const REFERENCE_THRESHOLD_SIGMA: f64 = 1.0;

/// Soft pass/fail of a merged estimate against a tension threshold.
///
/// `passed` is a reporting fact, not an authority: a failing verdict still
/// accompanies a complete, well-formed merged estimate, and the engine never
/// raises an error for it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Residual tension of the merged estimate against the reference, in σ.
    pub residual_tension_sigma: f64,
    /// Threshold the residual was compared against, in σ.
    pub threshold_sigma: f64,
    /// `true` when `residual_tension_sigma < threshold_sigma`.
    pub passed: bool,
}

impl ValidationVerdict {
    /// Evaluate a residual tension against a threshold.
    pub fn evaluate(residual_tension_sigma: f64, threshold_sigma: f64) -> Self {
        Self {
            residual_tension_sigma,
            threshold_sigma,
            passed: residual_tension_sigma < threshold_sigma,
        }
    }
}

/// Reject a measurement with a non-positive or non-finite sigma, or a
/// non-finite value.
pub(crate) fn ensure_measurement(m: &Measurement) -> EngineResult<()> {
    if m.is_well_formed() {
        Ok(())
    } else {
        Err(EngineError::InvalidMeasurement(format!(
            "{}: sigma must be positive and finite, value finite (got {} ± {})",
            m.label, m.value, m.sigma
        )))
    }
}

/// Reject negative or non-finite penalty scales.
pub(crate) fn ensure_config(config: &EpistemicConfig) -> EngineResult<()> {
    if config.is_well_formed() {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!(
            "delta_t and f_sys must be non-negative and finite (got delta_t = {}, f_sys = {})",
            config.delta_t, config.f_sys
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_below_threshold_passes() {
        let verdict = ValidationVerdict::evaluate(0.34, REFERENCE_THRESHOLD_SIGMA);
        assert!(verdict.passed);
        assert_eq!(verdict.threshold_sigma, 1.0);
    }

    #[test]
    fn residual_at_threshold_fails() {
        // The boundary is exclusive: tension equal to the threshold fails.
        let verdict = ValidationVerdict::evaluate(1.0, 1.0);
        assert!(!verdict.passed);
    }

    #[test]
    fn residual_above_threshold_fails() {
        let verdict = ValidationVerdict::evaluate(6.2, 1.0);
        assert!(!verdict.passed);
        assert_eq!(verdict.residual_tension_sigma, 6.2);
    }

    #[test]
    fn custom_threshold() {
        assert!(ValidationVerdict::evaluate(1.5, 2.0).passed);
        assert!(!ValidationVerdict::evaluate(1.5, 1.0).passed);
    }

    #[test]
    fn malformed_measurement_is_rejected() {
        let m = Measurement::new("bad", 70.0, 0.0);
        assert!(matches!(
            ensure_measurement(&m),
            Err(EngineError::InvalidMeasurement(_))
        ));
    }

    #[test]
    fn malformed_config_is_rejected() {
        let config = EpistemicConfig::new(-1.44, 0.01);
        assert!(matches!(
            ensure_config(&config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let verdict = ValidationVerdict::evaluate(0.34, 1.0);
        let json = serde_json::to_string(&verdict).unwrap();
        let parsed: ValidationVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, parsed);
    }
}
