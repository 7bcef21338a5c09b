//! Measurement reconciliation core for the Concordance Ledger (CCL).
//!
//! Reconciles independent, mutually discrepant measurements of a single
//! physical quantity into one combined estimate, inflating the reported
//! uncertainty by an epistemic penalty proportional to the disagreement
//! between inputs.
//!
//! The engine is purely sequential and deterministic: every function is a
//! pure computation over immutable inputs, holds no state between calls, and
//! reads no clock and no environment. Configuration enters only as an
//! explicit [`EpistemicConfig`](ccl_types::EpistemicConfig) value.
//!
//! # Key Operations
//!
//! - [`tension`] — dimensionless discrepancy between two measurements, in σ
//! - [`merge`] — epistemic penalty merge of a local estimate against a reference
//! - [`merge_set`] — same, for a set of co-equal anchors reduced first
//! - [`loao`] — leave-one-anchor-out robustness table
//! - [`Reducer`] — the single reduction policy shared by every call site
//! - [`ValidationVerdict`] — soft pass/fail against a tension threshold

pub mod correction;
pub mod error;
pub mod loao;
pub mod merge;
pub mod reduce;
pub mod tension;
pub mod validate;

pub use correction::bias_correction;
pub use error::{EngineError, EngineResult};
pub use loao::{loao, LoaoScenario, BASELINE_SCENARIO};
pub use merge::{merge, merge_set, MergeDiagnostics, MergedEstimate};
pub use reduce::Reducer;
pub use tension::{tension, tension_between, TensionResult};
pub use validate::{ValidationVerdict, REFERENCE_THRESHOLD_SIGMA};
