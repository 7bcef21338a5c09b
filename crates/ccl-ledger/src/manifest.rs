//! Repository file manifest with a deterministic Merkle root.
//!
//! Walks the working tree, hashes every regular file, and folds the sorted
//! `(path, digest)` leaves into one root for release integrity. The walk
//! skips version-control and build directories and the manifest's own
//! output files, so recomputing after a write is stable.

use std::fs;
use std::path::{Path, PathBuf};

use ccl_crypto::{manifest_leaf, merkle_root, ContentHasher};
use ccl_types::Digest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use walkdir::WalkDir;

use crate::error::LedgerError;

/// File name of the human-readable manifest.
pub const MANIFEST_TXT: &str = "HASHES.txt";
/// File name of the machine-readable manifest.
pub const MANIFEST_JSON: &str = "HASHES.json";

/// One hashed file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Repository-relative path, `/`-separated.
    pub path: String,
    /// Hex content digest.
    pub digest: String,
}

/// The full manifest: per-file digests and their Merkle root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub merkle_root: String,
    pub files: Vec<ManifestEntry>,
}

/// Hash every regular file under `root` into a manifest.
///
/// Files are sorted by relative path; hidden directories (`.git` and
/// friends), `target`, and prior manifest outputs are skipped. An empty
/// walk is an error.
pub fn build_manifest(root: &Path) -> Result<Manifest, LedgerError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e))
    {
        let entry = entry.map_err(|e| LedgerError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == MANIFEST_TXT || name == MANIFEST_JSON {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        let bytes = fs::read(entry.path())?;
        files.push(ManifestEntry {
            path: rel,
            digest: ContentHasher::MANIFEST.hash(&bytes).to_hex(),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    let root_digest = compute_root(&files)
        .ok_or_else(|| LedgerError::EmptyManifest(root.display().to_string()))?;

    info!(
        files = files.len(),
        root = %root_digest.short_hex(),
        "manifest built"
    );

    Ok(Manifest {
        generated_at: Utc::now(),
        merkle_root: root_digest.to_hex(),
        files,
    })
}

/// Recompute the tree under `root` and compare against a recorded manifest.
pub fn verify_manifest(root: &Path, recorded: &Manifest) -> Result<(), LedgerError> {
    let current = build_manifest(root)?;
    if current.merkle_root == recorded.merkle_root {
        Ok(())
    } else {
        Err(LedgerError::ManifestMismatch {
            recorded: recorded.merkle_root.clone(),
            recomputed: current.merkle_root,
        })
    }
}

/// Write `HASHES.txt` and `HASHES.json` into `output_dir`.
pub fn write_manifest(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf, LedgerError> {
    fs::create_dir_all(output_dir)?;

    let mut txt = String::new();
    txt.push_str("# Repository hash manifest\n");
    txt.push_str(&format!(
        "# Timestamp: {}\n",
        manifest.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
    ));
    txt.push_str(&format!("# MerkleRoot: {}\n", manifest.merkle_root));
    for entry in &manifest.files {
        txt.push_str(&format!("{}  {}\n", entry.digest, entry.path));
    }
    fs::write(output_dir.join(MANIFEST_TXT), txt)?;

    let json_path = output_dir.join(MANIFEST_JSON);
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| LedgerError::Serialization(e.to_string()))?;
    fs::write(&json_path, json)?;
    Ok(json_path)
}

fn compute_root(files: &[ManifestEntry]) -> Option<Digest> {
    let leaves: Vec<Digest> = files
        .iter()
        .filter_map(|f| {
            Digest::from_hex(&f.digest)
                .ok()
                .map(|d| manifest_leaf(&f.path, &d))
        })
        .collect();
    merkle_root(&leaves)
}

fn is_excluded_dir(entry: &walkdir::DirEntry) -> bool {
    // depth 0 is the walk root itself; only prune below it.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.') || name == "target")
            .unwrap_or(false)
}
