//! Dataset-driven fingerprinting tool.
//!
//! Reads a JSON array of request records, prints one fingerprint per
//! record to stdout, and with `--check` verifies records that carry an
//! expected fingerprint.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use httpfinger_common::{FingerConfig, ReportMode};
use httpfinger_core::{Fingerprinter, HttpRequest};

/// One dataset entry: a request plus an optional expected fingerprint.
#[derive(Debug, Deserialize)]
struct DatasetRecord {
    #[serde(flatten)]
    request: HttpRequest,
    #[serde(default)]
    fingerprint: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    dataset: String,
    config: Option<String>,
    mode: Option<String>,
    check: bool,
}

const USAGE: &str = "usage: httpfinger <dataset.json> [--config <file.yaml>] [--mode <name>] [--check]";

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                parsed.config = Some(
                    iter.next()
                        .with_context(|| format!("--config needs a value\n{USAGE}"))?
                        .clone(),
                );
            }
            "--mode" => {
                parsed.mode = Some(
                    iter.next()
                        .with_context(|| format!("--mode needs a value\n{USAGE}"))?
                        .clone(),
                );
            }
            "--check" => parsed.check = true,
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'\n{USAGE}"),
            path if parsed.dataset.is_empty() => parsed.dataset = path.to_string(),
            extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
        }
    }
    if parsed.dataset.is_empty() {
        bail!("missing dataset path\n{USAGE}");
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let mut config = match &args.config {
        Some(path) => FingerConfig::load(path)
            .with_context(|| format!("loading configuration from '{path}'"))?,
        None => FingerConfig::default(),
    };
    if let Some(mode) = &args.mode {
        // An illegal mode name is rejected here, before any computation.
        config.report_mode = ReportMode::parse(mode)?;
    }

    let engine = Fingerprinter::from_config(&config)?;
    info!(
        dataset = %args.dataset,
        report_mode = config.report_mode.as_str(),
        "fingerprinting dataset"
    );

    let content = std::fs::read_to_string(&args.dataset)
        .with_context(|| format!("reading dataset '{}'", args.dataset))?;
    let records: Vec<DatasetRecord> =
        serde_json::from_str(&content).context("parsing dataset records")?;

    let mut mismatches = 0usize;
    for (index, record) in records.iter().enumerate() {
        let fingerprint = engine
            .fingerprint(&record.request)
            .with_context(|| format!("fingerprinting record {index}"))?;
        println!("{fingerprint}");

        if args.check {
            match &record.fingerprint {
                Some(expected) if *expected != fingerprint => {
                    error!(
                        record = index,
                        expected = %expected,
                        computed = %fingerprint,
                        "fingerprint mismatch"
                    );
                    mismatches += 1;
                }
                _ => {}
            }
        }
    }

    if args.check {
        info!(records = records.len(), mismatches, "check complete");
        if mismatches > 0 {
            bail!("{mismatches} fingerprint mismatch(es)");
        }
    }

    Ok(())
}
