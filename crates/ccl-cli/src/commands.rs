use std::fs;

use anyhow::{bail, Context};
use ccl_engine::{bias_correction, loao, merge, merge_set, TensionResult};
use ccl_ledger::{
    build_manifest, verify_manifest, write_manifest, LedgerRecord, LedgerWriter, Manifest,
    MANIFEST_JSON,
};
use ccl_types::{EpistemicConfig, Measurement};
use colored::Colorize;

use crate::cli::*;
use crate::reference;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let json = matches!(cli.format, OutputFormat::Json);
    match cli.command {
        Command::Audit(args) => cmd_audit(args, json),
        Command::Merge(args) => cmd_merge(args, json),
        Command::Loao(args) => cmd_loao(args, json),
        Command::Tension(args) => cmd_tension(args, json),
        Command::Manifest(args) => cmd_manifest(args, json),
    }
}

fn cmd_audit(args: AuditArgs, json: bool) -> anyhow::Result<()> {
    let config = EpistemicConfig::new(args.delta_t, args.f_sys);
    let anchors = reference::reference_anchors();
    let measurements: Vec<Measurement> =
        anchors.iter().map(|a| a.measurement.clone()).collect();
    let baseline = reference::baseline_measurement(args.h0_ref, args.sigma_ref);

    let scenarios = loao(&measurements, &baseline)?;
    let merged = merge_set(&measurements, &baseline, &config)?;

    let mut record = LedgerRecord::assemble(
        reference::baseline_entry(args.h0_ref, args.sigma_ref),
        reference::anchor_entries(&anchors),
        scenarios,
        config,
        merged,
        args.threshold,
    );
    let artifacts = LedgerWriter::new(&args.output_dir).write(&mut record)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Anchors:");
    for m in &measurements {
        println!("  {}: {:.2} ± {:.2}", m.label.yellow(), m.value, m.sigma);
    }

    println!("\nObserver context distances (diagnostic):");
    for (i, a) in anchors.iter().enumerate() {
        for b in anchors.iter().skip(i + 1) {
            println!(
                "  {} / {}: {:.4}",
                a.measurement.label,
                b.measurement.label,
                a.tensor.distance_to(&b.tensor)
            );
        }
    }
    let correction = bias_correction(&measurements[0], &measurements[1..])?;
    println!(
        "Anchor bias correction ({}): {:.2}",
        measurements[0].label, correction
    );

    println!("\nLOAO analysis:");
    for (name, s) in &record.loao {
        println!(
            "  {:<14} {:.2} ± {:.2}  tension {:.3}σ",
            name, s.h0_local, s.sigma_local, s.tension_sigma
        );
    }

    println!(
        "\nMerged: {} ± {} (residual tension {}σ)",
        format!("{:.2}", record.merged.value).bold(),
        format!("{:.2}", record.merged.sigma).bold(),
        format!("{:.3}", record.merged.residual_tension_sigma).bold(),
    );
    if record.validation.passed {
        println!(
            "{} VALIDATION PASSED: tension < {}σ",
            "✓".green().bold(),
            args.threshold
        );
    } else {
        println!(
            "{} VALIDATION FAILED: tension ≥ {}σ",
            "✗".red().bold(),
            args.threshold
        );
    }

    println!("\nLedger: {}", artifacts.json_path.display());
    println!("  digest {}", artifacts.digest.to_hex().dimmed());
    Ok(())
}

fn cmd_merge(args: MergeArgs, json: bool) -> anyhow::Result<()> {
    let local = parse_measurement(&args.local, "local")?;
    let reference = parse_measurement(&args.reference, "reference")?;
    let config = EpistemicConfig::new(args.delta_t, args.f_sys);
    let merged = merge(&local, &reference, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    let d = &merged.diagnostics;
    println!("Raw tension:        {:.4}", d.raw_tension);
    println!("Sigma stat:         {:.4}", d.sigma_stat);
    println!("Observer penalty:   {:.4}", d.penalty_observer);
    println!("Systematic penalty: {:.4}", d.penalty_systematic);
    println!(
        "\nMerged: {} ± {} (residual tension {}σ)",
        format!("{:.2}", merged.value).bold(),
        format!("{:.2}", merged.sigma).bold(),
        format!("{:.3}", merged.residual_tension_sigma).bold(),
    );
    Ok(())
}

fn cmd_loao(args: LoaoArgs, json: bool) -> anyhow::Result<()> {
    let measurements = match &args.anchors {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading anchors from {}", path.display()))?;
            serde_json::from_str::<Vec<Measurement>>(&raw)
                .with_context(|| format!("parsing anchors from {}", path.display()))?
        }
        None => reference::reference_anchors()
            .iter()
            .map(|a| a.measurement.clone())
            .collect(),
    };
    let baseline = reference::baseline_measurement(args.h0_ref, args.sigma_ref);
    let scenarios = loao(&measurements, &baseline)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scenarios)?);
        return Ok(());
    }

    for (name, s) in &scenarios {
        println!(
            "{:<14} [{}]  {:.2} ± {:.2}  tension {:.3}σ",
            name.yellow(),
            s.included_labels.join("+"),
            s.h0_local,
            s.sigma_local,
            s.tension_sigma
        );
    }
    Ok(())
}

fn cmd_tension(args: TensionArgs, json: bool) -> anyhow::Result<()> {
    let first = parse_measurement(&args.first, "first")?;
    let second = parse_measurement(&args.second, "second")?;
    let result = TensionResult::compute(first.value, first.sigma, second.value, second.sigma)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Raw difference: {:.4}", result.raw_difference);
    println!("Combined sigma: {:.4}", result.combined_sigma);
    println!("Tension:        {}σ", format!("{:.3}", result.tension_sigma).bold());
    Ok(())
}

fn cmd_manifest(args: ManifestArgs, json: bool) -> anyhow::Result<()> {
    if args.check {
        let path = args.output_dir.join(MANIFEST_JSON);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading recorded manifest {}", path.display()))?;
        let recorded: Manifest = serde_json::from_str(&raw)
            .with_context(|| format!("parsing recorded manifest {}", path.display()))?;
        verify_manifest(&args.root, &recorded)?;
        println!(
            "{} manifest matches: root {}",
            "✓".green().bold(),
            recorded.merkle_root.dimmed()
        );
        return Ok(());
    }

    let manifest = build_manifest(&args.root)?;
    write_manifest(&manifest, &args.output_dir)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }
    println!("{} files hashed", manifest.files.len());
    println!("Merkle root: {}", manifest.merkle_root.bold());
    Ok(())
}

fn parse_measurement(raw: &str, default_label: &str) -> anyhow::Result<Measurement> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() < 2 || parts.len() > 3 {
        bail!("expected value,sigma[,label], got {raw:?}");
    }
    let value: f64 = parts[0]
        .trim()
        .parse()
        .with_context(|| format!("invalid value in {raw:?}"))?;
    let sigma: f64 = parts[1]
        .trim()
        .parse()
        .with_context(|| format!("invalid sigma in {raw:?}"))?;
    let label = parts
        .get(2)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| default_label.to_string());
    Ok(Measurement::new(label, value, sigma))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_sigma() {
        let m = parse_measurement("73.6,0.51", "local").unwrap();
        assert_eq!(m.value, 73.6);
        assert_eq!(m.sigma, 0.51);
        assert_eq!(m.label, "local");
    }

    #[test]
    fn parse_with_label() {
        let m = parse_measurement("67.4, 0.5, Planck2018", "reference").unwrap();
        assert_eq!(m.label, "Planck2018");
    }

    #[test]
    fn parse_rejects_missing_sigma() {
        assert!(parse_measurement("73.6", "local").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_measurement("abc,def", "local").is_err());
        assert!(parse_measurement("1,2,3,4", "local").is_err());
    }
}
