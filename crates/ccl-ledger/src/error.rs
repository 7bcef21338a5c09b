use thiserror::Error;

/// Errors from ledger assembly and output.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// File system error while writing or reading artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A recomputed manifest root disagrees with the recorded one.
    #[error("manifest mismatch: recorded root {recorded}, recomputed {recomputed}")]
    ManifestMismatch { recorded: String, recomputed: String },

    /// The manifest walk found nothing to hash.
    #[error("empty manifest: no files under {0}")]
    EmptyManifest(String),
}

impl From<ccl_crypto::HasherError> for LedgerError {
    fn from(e: ccl_crypto::HasherError) -> Self {
        Self::Serialization(e.to_string())
    }
}
