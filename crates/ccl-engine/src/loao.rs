//! Leave-one-anchor-out (LOAO) robustness analysis.
//!
//! Recomputes the unweighted combination under every drop-one subset to test
//! how much the combined estimate depends on any single anchor. Robustness is
//! assessed, not enforced: no scenario is ever rejected automatically.

use ccl_types::Measurement;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::reduce::Reducer;
use crate::tension::tension_between;

/// Key of the all-anchors scenario.
pub const BASELINE_SCENARIO: &str = "baseline";

/// One tested subset: the anchors kept, their reduced combination, and its
/// tension against the reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaoScenario {
    pub included_labels: Vec<String>,
    pub h0_local: f64,
    pub sigma_local: f64,
    pub tension_sigma: f64,
}

impl LoaoScenario {
    fn from_subset(subset: &[Measurement], reference: &Measurement) -> EngineResult<Self> {
        let reduced = Reducer::default().reduce(subset)?;
        let tension_sigma = tension_between(&reduced, reference)?;
        Ok(Self {
            included_labels: subset.iter().map(|m| m.label.clone()).collect(),
            h0_local: reduced.value,
            sigma_local: reduced.sigma,
            tension_sigma,
        })
    }
}

/// Run the LOAO analysis over a set of labeled measurements.
///
/// Produces the baseline scenario over all N anchors, then one `drop_<label>`
/// scenario per anchor over the remaining N−1, in the order the measurements
/// were supplied. Fails with [`EngineError::InsufficientData`] when the full
/// set has fewer than two anchors (a single-element drop scenario is
/// undefined).
pub fn loao(
    measurements: &[Measurement],
    reference: &Measurement,
) -> EngineResult<IndexMap<String, LoaoScenario>> {
    if measurements.len() < 2 {
        return Err(EngineError::InsufficientData {
            required: 2,
            actual: measurements.len(),
        });
    }

    let mut scenarios = IndexMap::with_capacity(measurements.len() + 1);
    scenarios.insert(
        BASELINE_SCENARIO.to_string(),
        LoaoScenario::from_subset(measurements, reference)?,
    );

    for (index, dropped) in measurements.iter().enumerate() {
        let subset: Vec<Measurement> = measurements
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .map(|(_, m)| m.clone())
            .collect();
        let scenario = LoaoScenario::from_subset(&subset, reference)?;
        debug!(
            dropped = %dropped.label,
            h0_local = scenario.h0_local,
            tension_sigma = scenario.tension_sigma,
            "loao scenario"
        );
        scenarios.insert(format!("drop_{}", dropped.label), scenario);
    }

    Ok(scenarios)
}
