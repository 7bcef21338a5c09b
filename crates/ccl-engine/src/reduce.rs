//! Reduction of a set of co-equal anchors to one pseudo-measurement.
//!
//! Every call site that collapses a measurement set (the set merge, the LOAO
//! baseline, each drop-one subset) goes through the same [`Reducer`] policy,
//! so a future change to the reduction rule touches one place.

use ccl_types::Measurement;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::validate::ensure_measurement;

/// The reduction policy: unweighted mean of values, quadrature mean of
/// sigmas divided by the count, times an inflation multiplier.
///
/// The rule is deliberately *not* inverse-variance weighting at the set
/// level; anchors enter as co-equal voices regardless of their individual
/// precision. This matches the reference numerics exactly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reducer {
    /// Multiplier applied to the reduced sigma. 1.0 for the plain policy;
    /// the conservative fit variant inflates by a fixed factor.
    pub inflation: f64,
}

impl Default for Reducer {
    fn default() -> Self {
        Self { inflation: 1.0 }
    }
}

impl Reducer {
    /// A reducer that inflates the reduced sigma by `factor`.
    pub fn conservative(factor: f64) -> Self {
        Self { inflation: factor }
    }

    /// Collapse `measurements` to a single pseudo-measurement.
    ///
    /// `value = mean(values)`, `sigma = sqrt(Σ sigma_i²) / N * inflation`,
    /// label joined with `+`. A single measurement reduces to itself (a
    /// drop-one subset of a two-anchor set is one measurement); an empty set
    /// is [`EngineError::InsufficientData`].
    pub fn reduce(&self, measurements: &[Measurement]) -> EngineResult<Measurement> {
        if !self.inflation.is_finite() || self.inflation <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "inflation must be positive and finite (got {})",
                self.inflation
            )));
        }
        if measurements.is_empty() {
            return Err(EngineError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        for m in measurements {
            ensure_measurement(m)?;
        }

        let n = measurements.len() as f64;
        let value = measurements.iter().map(|m| m.value).sum::<f64>() / n;
        let quadrature = measurements
            .iter()
            .map(|m| m.sigma * m.sigma)
            .sum::<f64>()
            .sqrt();
        let sigma = quadrature / n * self.inflation;
        let label = measurements
            .iter()
            .map(|m| m.label.as_str())
            .collect::<Vec<_>>()
            .join("+");

        Ok(Measurement::new(label, value, sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<Measurement> {
        vec![
            Measurement::new("MilkyWay", 76.13, 0.99),
            Measurement::new("LMC", 72.29, 0.80),
            Measurement::new("NGC4258", 72.51, 0.83),
        ]
    }

    #[test]
    fn reference_baseline_reduction() {
        let reduced = Reducer::default().reduce(&anchors()).unwrap();
        assert!((reduced.value - 73.6433).abs() < 1e-3);
        assert!((reduced.sigma - 0.50651).abs() < 1e-4);
        assert_eq!(reduced.label, "MilkyWay+LMC+NGC4258");
    }

    #[test]
    fn pair_reduction_divides_quadrature_by_two() {
        let pair = vec![
            Measurement::new("LMC", 72.29, 0.80),
            Measurement::new("NGC4258", 72.51, 0.83),
        ];
        let reduced = Reducer::default().reduce(&pair).unwrap();
        assert!((reduced.value - 72.40).abs() < 1e-9);
        assert!((reduced.sigma - 0.576388).abs() < 1e-5);
    }

    #[test]
    fn single_measurement_reduces_to_itself() {
        let one = vec![Measurement::new("LMC", 72.29, 0.80)];
        let reduced = Reducer::default().reduce(&one).unwrap();
        assert_eq!(reduced.value, 72.29);
        assert!((reduced.sigma - 0.80).abs() < 1e-12);
        assert_eq!(reduced.label, "LMC");
    }

    #[test]
    fn empty_set_is_insufficient() {
        let err = Reducer::default().reduce(&[]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn malformed_member_is_rejected() {
        let bad = vec![
            Measurement::new("ok", 72.0, 0.8),
            Measurement::new("bad", 72.0, -0.8),
        ];
        assert!(matches!(
            Reducer::default().reduce(&bad),
            Err(EngineError::InvalidMeasurement(_))
        ));
    }

    #[test]
    fn conservative_inflation_scales_sigma() {
        let plain = Reducer::default().reduce(&anchors()).unwrap();
        let inflated = Reducer::conservative(1.5).reduce(&anchors()).unwrap();
        assert_eq!(plain.value, inflated.value);
        assert!((inflated.sigma - plain.sigma * 1.5).abs() < 1e-12);
    }

    #[test]
    fn non_positive_inflation_is_rejected() {
        assert!(matches!(
            Reducer::conservative(0.0).reduce(&anchors()),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            Reducer::conservative(f64::NAN).reduce(&anchors()),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn reduction_is_deterministic() {
        let a = Reducer::default().reduce(&anchors()).unwrap();
        let b = Reducer::default().reduce(&anchors()).unwrap();
        assert_eq!(a, b);
    }
}
