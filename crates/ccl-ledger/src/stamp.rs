//! Content-hash stamping and artifact output.
//!
//! The stamping rule follows the reference pipeline: serialize the record
//! with an empty digest slot, hash that payload, embed the hex digest into
//! `metadata.ledger_digest`, then serialize again for writing. Verification
//! reverses the rule: clear the slot, rehash, compare.

use std::fs;
use std::path::{Path, PathBuf};

use ccl_crypto::ContentHasher;
use ccl_types::Digest;
use tracing::info;

use crate::error::LedgerError;
use crate::record::LedgerRecord;

/// File names of the three companion artifacts.
const LEDGER_JSON: &str = "concordance_ledger.json";
const LEDGER_CSV: &str = "concordance_ledger.csv";
const LEDGER_DIGEST: &str = "concordance_ledger.digest";

/// Paths and digest of one written ledger.
#[derive(Clone, Debug)]
pub struct LedgerArtifacts {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub digest_path: PathBuf,
    pub digest: Digest,
}

/// Writes a stamped record and its companions into one output directory.
pub struct LedgerWriter {
    output_dir: PathBuf,
}

impl LedgerWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Stamp the record and write the JSON, CSV, and digest-file artifacts.
    pub fn write(&self, record: &mut LedgerRecord) -> Result<LedgerArtifacts, LedgerError> {
        let digest = stamp(record)?;
        fs::create_dir_all(&self.output_dir)?;

        let json_path = self.output_dir.join(LEDGER_JSON);
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        fs::write(&json_path, json)?;

        let csv_path = self.output_dir.join(LEDGER_CSV);
        fs::write(&csv_path, render_csv(record, &digest))?;

        let digest_path = self.output_dir.join(LEDGER_DIGEST);
        fs::write(&digest_path, format!("{}  {}\n", digest.to_hex(), LEDGER_JSON))?;

        info!(digest = %digest.short_hex(), dir = %self.output_dir.display(), "ledger written");

        Ok(LedgerArtifacts {
            json_path,
            csv_path,
            digest_path,
            digest,
        })
    }
}

/// Hash the record with an empty digest slot and embed the result.
fn stamp(record: &mut LedgerRecord) -> Result<Digest, LedgerError> {
    record.metadata.ledger_digest = None;
    let digest = ContentHasher::LEDGER.hash_json(record)?;
    record.metadata.ledger_digest = Some(digest.to_hex());
    Ok(digest)
}

/// Recompute a stamped record's digest and compare with the embedded one.
pub fn verify_stamp(record: &LedgerRecord) -> Result<bool, LedgerError> {
    let Some(embedded) = &record.metadata.ledger_digest else {
        return Ok(false);
    };
    let mut canonical = record.clone();
    canonical.metadata.ledger_digest = None;
    let recomputed = ContentHasher::LEDGER.hash_json(&canonical)?;
    Ok(recomputed.to_hex() == *embedded)
}

fn render_csv(record: &LedgerRecord, digest: &Digest) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Ledger digest: {}\n\n", digest.to_hex()));

    out.push_str("Anchor,UHA,H0,Sigma_H0,N_Configs,Gaia_ZP_mas,Metallicity_Corrected,Notes\n");
    for anchor in &record.anchors {
        let gaia = anchor
            .gaia_zp_correction_mas
            .map(|v| v.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            anchor.anchor_id,
            anchor.uha,
            anchor.h0,
            anchor.sigma,
            anchor.n_configurations,
            gaia,
            anchor.metallicity_corrected,
            anchor.systematic_notes,
        ));
    }

    out.push_str("\n# LOAO Analysis Results\n");
    out.push_str("Scenario,Anchors_Included,H0_Local,Sigma_Local,Tension_Sigma\n");
    for (name, scenario) in &record.loao {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            name,
            scenario.included_labels.join("+"),
            scenario.h0_local,
            scenario.sigma_local,
            scenario.tension_sigma,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use ccl_engine::{loao, merge_set, REFERENCE_THRESHOLD_SIGMA};
    use ccl_types::{EpistemicConfig, Measurement};

    use crate::record::BaselineEntry;

    use super::*;

    fn sample_record() -> LedgerRecord {
        let anchors = vec![
            Measurement::new("MilkyWay", 76.13, 0.99),
            Measurement::new("LMC", 72.29, 0.80),
            Measurement::new("NGC4258", 72.51, 0.83),
        ];
        let reference = Measurement::new("Planck2018", 67.4, 0.5);
        let config = EpistemicConfig::default();
        LedgerRecord::assemble(
            BaselineEntry {
                label: "Planck2018".into(),
                h0: 67.4,
                sigma: 0.5,
                citation: "Planck 2018".into(),
            },
            vec![],
            loao(&anchors, &reference).unwrap(),
            config,
            merge_set(&anchors, &reference, &config).unwrap(),
            REFERENCE_THRESHOLD_SIGMA,
        )
    }

    #[test]
    fn write_produces_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample_record();
        let artifacts = LedgerWriter::new(dir.path()).write(&mut record).unwrap();

        assert!(artifacts.json_path.exists());
        assert!(artifacts.csv_path.exists());
        assert!(artifacts.digest_path.exists());
    }

    #[test]
    fn written_record_verifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample_record();
        LedgerWriter::new(dir.path()).write(&mut record).unwrap();

        let json = std::fs::read_to_string(dir.path().join(LEDGER_JSON)).unwrap();
        let parsed: LedgerRecord = serde_json::from_str(&json).unwrap();
        assert!(verify_stamp(&parsed).unwrap());
    }

    #[test]
    fn tampered_record_fails_verification() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample_record();
        LedgerWriter::new(dir.path()).write(&mut record).unwrap();

        record.merged.value += 1.0;
        assert!(!verify_stamp(&record).unwrap());
    }

    #[test]
    fn unstamped_record_does_not_verify() {
        let record = sample_record();
        assert!(!verify_stamp(&record).unwrap());
    }

    #[test]
    fn digest_file_names_the_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample_record();
        let artifacts = LedgerWriter::new(dir.path()).write(&mut record).unwrap();

        let line = std::fs::read_to_string(&artifacts.digest_path).unwrap();
        assert_eq!(
            line,
            format!("{}  {}\n", artifacts.digest.to_hex(), LEDGER_JSON)
        );
    }

    #[test]
    fn csv_contains_loao_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = sample_record();
        let artifacts = LedgerWriter::new(dir.path()).write(&mut record).unwrap();

        let csv = std::fs::read_to_string(&artifacts.csv_path).unwrap();
        assert!(csv.contains("baseline,MilkyWay+LMC+NGC4258"));
        assert!(csv.contains("drop_MilkyWay,LMC+NGC4258"));
    }

    #[test]
    fn restamping_identical_payload_reproduces_digest() {
        let mut record = sample_record();
        let first = stamp(&mut record).unwrap();
        let second = stamp(&mut record).unwrap();
        assert_eq!(first, second);
    }
}
