use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ccl",
    about = "Concordance Ledger — measurement reconciliation with epistemic penalties",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full audit pipeline on the reference anchor set and write the SSOT ledger
    Audit(AuditArgs),
    /// Merge one measurement against a reference with the epistemic penalty
    Merge(MergeArgs),
    /// Leave-one-anchor-out robustness table
    Loao(LoaoArgs),
    /// Tension between two measurements, in σ
    Tension(TensionArgs),
    /// Compute or check the repository hash manifest
    Manifest(ManifestArgs),
}

#[derive(Args)]
pub struct AuditArgs {
    /// Observer penalty scale ΔT
    #[arg(long, default_value_t = 1.44)]
    pub delta_t: f64,
    /// Systematic fraction f_sys
    #[arg(long, default_value_t = 0.01)]
    pub f_sys: f64,
    /// Validation threshold, in σ
    #[arg(long, default_value_t = 1.0)]
    pub threshold: f64,
    /// Reference baseline value
    #[arg(long, default_value_t = 67.4)]
    pub h0_ref: f64,
    /// Reference baseline uncertainty
    #[arg(long, default_value_t = 0.5)]
    pub sigma_ref: f64,
    /// Directory for the ledger artifacts
    #[arg(long, default_value = "results/artifacts")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Local measurement as value,sigma[,label]
    #[arg(long)]
    pub local: String,
    /// Reference measurement as value,sigma[,label]
    #[arg(long)]
    pub reference: String,
    #[arg(long, default_value_t = 1.44)]
    pub delta_t: f64,
    #[arg(long, default_value_t = 0.01)]
    pub f_sys: f64,
}

#[derive(Args)]
pub struct LoaoArgs {
    /// JSON file with an array of {value, sigma, label} anchors
    /// (defaults to the built-in reference set)
    #[arg(long)]
    pub anchors: Option<PathBuf>,
    #[arg(long, default_value_t = 67.4)]
    pub h0_ref: f64,
    #[arg(long, default_value_t = 0.5)]
    pub sigma_ref: f64,
}

#[derive(Args)]
pub struct TensionArgs {
    /// First measurement as value,sigma[,label]
    pub first: String,
    /// Second measurement as value,sigma[,label]
    pub second: String,
}

#[derive(Args)]
pub struct ManifestArgs {
    /// Tree to hash
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Directory holding HASHES.txt / HASHES.json
    #[arg(long, default_value = "results/artifacts")]
    pub output_dir: PathBuf,
    /// Compare the tree against the recorded manifest instead of writing
    #[arg(long)]
    pub check: bool,
}
