//! Anchor bias correction diagnostic.

use ccl_types::Measurement;

use crate::error::{EngineError, EngineResult};
use crate::validate::ensure_measurement;

/// Offset of one anchor from the mean of the others, halved and negated.
///
/// `Δ = −0.5 × (target − mean(others))`
///
/// Quantifies how far a systematically high (or low) anchor sits from the
/// external consensus. Reported as a diagnostic; never applied automatically
/// to the target's value.
pub fn bias_correction(target: &Measurement, others: &[Measurement]) -> EngineResult<f64> {
    ensure_measurement(target)?;
    if others.is_empty() {
        return Err(EngineError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    for m in others {
        ensure_measurement(m)?;
    }
    let external_mean = others.iter().map(|m| m.value).sum::<f64>() / others.len() as f64;
    Ok(-0.5 * (target.value - external_mean))
}
