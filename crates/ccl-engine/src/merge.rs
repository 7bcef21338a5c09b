//! The epistemic penalty merge of a local estimate against a reference.
//!
//! Statistical uncertainty alone cannot explain large disagreements between
//! independent methods. The merge therefore inflates the combined sigma by
//! two penalty terms added in quadrature: one scaling with the raw numeric
//! gap between the inputs (`delta_t`), one scaling with the magnitude of the
//! quantity itself (`f_sys`). The raw gap is used in its native units, not
//! σ-normalized, so the penalty composes correctly with `sigma_stat`.

use ccl_types::{EpistemicConfig, Measurement};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::reduce::Reducer;
use crate::tension::tension;
use crate::validate::{ensure_config, ensure_measurement};

/// Intermediate quantities of one merge, kept for the audit ledger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeDiagnostics {
    /// `|local − reference|`, native units.
    pub raw_tension: f64,
    /// Combined statistical uncertainty of the two inputs.
    pub sigma_stat: f64,
    /// `delta_t * raw_tension`.
    pub penalty_observer: f64,
    /// `f_sys * 0.5 * (local + reference)`.
    pub penalty_systematic: f64,
}

/// The combined estimate produced by one merge invocation.
///
/// Never updated in place; a new merge produces a new estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedEstimate {
    /// Inverse-variance weighted central value of the two inputs.
    pub value: f64,
    /// Penalized uncertainty.
    pub sigma: f64,
    /// Tension of the merged estimate against the reference, in σ.
    pub residual_tension_sigma: f64,
    pub diagnostics: MergeDiagnostics,
}

/// Merge a local measurement against a reference baseline.
///
/// The penalty terms inflate only the merged sigma; the central value is the
/// inverse-variance weighted mean of the two *inputs*, using their original
/// sigmas.
pub fn merge(
    local: &Measurement,
    reference: &Measurement,
    config: &EpistemicConfig,
) -> EngineResult<MergedEstimate> {
    ensure_measurement(local)?;
    ensure_measurement(reference)?;
    ensure_config(config)?;

    let raw_tension = (local.value - reference.value).abs();
    let sigma_stat = (local.sigma * local.sigma + reference.sigma * reference.sigma).sqrt();
    let penalty_observer = config.delta_t * raw_tension;
    let penalty_systematic = config.f_sys * 0.5 * (local.value + reference.value);

    let sigma = (sigma_stat * sigma_stat
        + penalty_observer * penalty_observer
        + penalty_systematic * penalty_systematic)
        .sqrt();

    let w_local = local.weight();
    let w_reference = reference.weight();
    let value = (w_local * local.value + w_reference * reference.value) / (w_local + w_reference);

    let residual_tension_sigma = tension(value, sigma, reference.value, reference.sigma)?;

    debug!(
        local = %local.label,
        reference = %reference.label,
        value,
        sigma,
        residual_tension_sigma,
        "merged estimate"
    );

    Ok(MergedEstimate {
        value,
        sigma,
        residual_tension_sigma,
        diagnostics: MergeDiagnostics {
            raw_tension,
            sigma_stat,
            penalty_observer,
            penalty_systematic,
        },
    })
}

/// Merge a set of co-equal anchors against a reference baseline.
///
/// The set is first collapsed by the default [`Reducer`] (unweighted mean,
/// quadrature mean over count), then merged pairwise. Requires at least two
/// anchors.
pub fn merge_set(
    anchors: &[Measurement],
    reference: &Measurement,
    config: &EpistemicConfig,
) -> EngineResult<MergedEstimate> {
    if anchors.len() < 2 {
        return Err(EngineError::InsufficientData {
            required: 2,
            actual: anchors.len(),
        });
    }
    let reduced = Reducer::default().reduce(anchors)?;
    merge(&reduced, reference, config)
}
