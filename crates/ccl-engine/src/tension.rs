//! The σ-normalized tension metric between two measurements.

use ccl_types::Measurement;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Discrepancy between two measurements, raw and normalized.
///
/// Derived on demand; never persisted independently of its parent merge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TensionResult {
    /// `|v1 − v2|`, in the native units of the quantity.
    pub raw_difference: f64,
    /// `sqrt(s1² + s2²)`.
    pub combined_sigma: f64,
    /// `raw_difference / combined_sigma`, in units of σ.
    pub tension_sigma: f64,
}

impl TensionResult {
    /// Compute the tension between `(v1, s1)` and `(v2, s2)`.
    ///
    /// Symmetric in its two inputs. Fails with
    /// [`EngineError::InvalidMeasurement`] unless both sigmas are positive
    /// and all four inputs finite.
    pub fn compute(v1: f64, s1: f64, v2: f64, s2: f64) -> EngineResult<Self> {
        for (v, s) in [(v1, s1), (v2, s2)] {
            if !v.is_finite() || !s.is_finite() || s <= 0.0 {
                return Err(EngineError::InvalidMeasurement(format!(
                    "sigma must be positive and finite, value finite (got {v} ± {s})"
                )));
            }
        }
        let raw_difference = (v1 - v2).abs();
        let combined_sigma = (s1 * s1 + s2 * s2).sqrt();
        Ok(Self {
            raw_difference,
            combined_sigma,
            tension_sigma: raw_difference / combined_sigma,
        })
    }
}

/// Tension between two measurements, in units of σ.
///
/// `T = |v1 − v2| / sqrt(s1² + s2²)`
pub fn tension(v1: f64, s1: f64, v2: f64, s2: f64) -> EngineResult<f64> {
    Ok(TensionResult::compute(v1, s1, v2, s2)?.tension_sigma)
}

/// Tension between two [`Measurement`]s, in units of σ.
pub fn tension_between(a: &Measurement, b: &Measurement) -> EngineResult<f64> {
    tension(a.value, a.sigma, b.value, b.sigma)
}
