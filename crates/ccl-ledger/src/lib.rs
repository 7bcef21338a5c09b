//! SSOT audit ledger for the Concordance Ledger (CCL).
//!
//! Assembles merge outputs, LOAO results, and anchor provenance metadata
//! into one self-describing record, stamps it with a content digest, and
//! writes the JSON record plus its CSV and digest-file companions. A
//! sibling module computes the repository file manifest with a
//! deterministic Merkle root for release integrity.
//!
//! Everything here is a downstream sink: nothing in this crate feeds back
//! into the merge arithmetic.

pub mod error;
pub mod manifest;
pub mod record;
pub mod stamp;

pub use error::LedgerError;
pub use manifest::{
    build_manifest, verify_manifest, write_manifest, Manifest, ManifestEntry, MANIFEST_JSON,
    MANIFEST_TXT,
};
pub use record::{AnchorEntry, BaselineEntry, LedgerMetadata, LedgerRecord};
pub use stamp::{verify_stamp, LedgerArtifacts, LedgerWriter};
