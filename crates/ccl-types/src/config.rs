use serde::{Deserialize, Serialize};

/// Scale constants for the epistemic penalty framework.
///
/// Both constants are externally supplied (CLI flags in the reference
/// deployment) and held fixed for the duration of one merge run. They are
/// not estimated from the data. The engine rejects negative values; a
/// negative penalty scale has no physical meaning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpistemicConfig {
    /// Observer tensor distance scale applied to the raw inter-method gap.
    pub delta_t: f64,
    /// Systematic fraction applied to the magnitude of the quantity.
    pub f_sys: f64,
}

impl Default for EpistemicConfig {
    fn default() -> Self {
        Self {
            delta_t: 1.44,
            f_sys: 0.01,
        }
    }
}

impl EpistemicConfig {
    pub fn new(delta_t: f64, f_sys: f64) -> Self {
        Self { delta_t, f_sys }
    }

    /// Returns `true` if both scales are finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.delta_t.is_finite() && self.f_sys.is_finite() && self.delta_t >= 0.0 && self.f_sys >= 0.0
    }
}
