//! The self-describing SSOT record structure.

use ccl_engine::{LoaoScenario, MergedEstimate, ValidationVerdict};
use ccl_types::{EpistemicConfig, HorizonAddress, ObserverContext};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Record provenance: when and by what the record was produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerMetadata {
    /// Wall-clock UTC timestamp of assembly.
    ///
    /// Sits inside the hashed payload, so repeated runs over identical
    /// statistical inputs stamp different digests.
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    /// Hex content digest of the record, embedded by the stamping step.
    /// `None` until stamped.
    pub ledger_digest: Option<String>,
}

/// The external reference baseline tension was evaluated against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub label: String,
    pub h0: f64,
    pub sigma: f64,
    pub citation: String,
}

/// One calibration anchor with its provenance metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorEntry {
    pub anchor_id: String,
    pub uha: String,
    pub h0: f64,
    pub sigma: f64,
    pub n_configurations: u32,
    pub observer_tensor: ObserverContext,
    /// Parallax zero-point correction in milliarcseconds, where applicable.
    /// Recorded, never applied to the measurement value.
    pub gaia_zp_correction_mas: Option<f64>,
    pub metallicity_corrected: bool,
    pub systematic_notes: String,
}

impl AnchorEntry {
    /// Build an entry from anchor statistics and provenance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        anchor_id: impl Into<String>,
        address: &HorizonAddress,
        h0: f64,
        sigma: f64,
        n_configurations: u32,
        observer_tensor: ObserverContext,
        gaia_zp_correction_mas: Option<f64>,
        metallicity_corrected: bool,
        systematic_notes: impl Into<String>,
    ) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            uha: address.to_string(),
            h0,
            sigma,
            n_configurations,
            observer_tensor,
            gaia_zp_correction_mas,
            metallicity_corrected,
            systematic_notes: systematic_notes.into(),
        }
    }
}

/// The complete SSOT record: inputs, robustness table, merged result, verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub metadata: LedgerMetadata,
    pub baseline: BaselineEntry,
    pub anchors: Vec<AnchorEntry>,
    pub loao: IndexMap<String, LoaoScenario>,
    pub epistemic_config: EpistemicConfig,
    pub merged: MergedEstimate,
    pub validation: ValidationVerdict,
}

impl LedgerRecord {
    /// Assemble an unstamped record.
    ///
    /// The verdict is derived here from the merged estimate's residual
    /// tension and the supplied threshold; the ledger records it, nothing
    /// enforces it.
    pub fn assemble(
        baseline: BaselineEntry,
        anchors: Vec<AnchorEntry>,
        loao: IndexMap<String, LoaoScenario>,
        epistemic_config: EpistemicConfig,
        merged: MergedEstimate,
        threshold_sigma: f64,
    ) -> Self {
        let validation = ValidationVerdict::evaluate(merged.residual_tension_sigma, threshold_sigma);
        Self {
            metadata: LedgerMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                ledger_digest: None,
            },
            baseline,
            anchors,
            loao,
            epistemic_config,
            merged,
            validation,
        }
    }
}
