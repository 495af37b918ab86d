//! Batch command - extract data from multiple policy documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use polex_core::{PolicyParser, TextAcquirer, ValidationResult, export_json};

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON records
    #[arg(short, long, default_value = "parsed")]
    output_dir: PathBuf,

    /// Also generate a summary CSV of validation flags
    #[arg(long)]
    summary: bool,

    /// Continue when a record cannot be saved
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct BatchResult {
    path: PathBuf,
    validation: ValidationResult,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // One parser serves all documents; each is processed start to finish.
    let acquirer = TextAcquirer::new().with_min_text_length(config.pdf.min_text_length);
    let parser = PolicyParser::new().with_acquirer(acquirer);
    let mut results = Vec::with_capacity(files.len());
    let mut save_failures = 0usize;

    for path in files {
        let report = parser.parse_report(&path);

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("record");
        let output_path = args.output_dir.join(format!("{}.json", stem));

        if let Err(e) = export_json(&report.record, &output_path) {
            error!("failed to save {}: {}", output_path.display(), e);
            save_failures += 1;
            if !args.continue_on_error {
                pb.abandon();
                anyhow::bail!("failed to save {}: {}", output_path.display(), e);
            }
        }

        debug!(
            "{} parsed in {}ms",
            path.display(),
            report.processing_time_ms
        );
        results.push(BatchResult {
            path,
            validation: report.validation,
            processing_time_ms: report.processing_time_ms,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if args.summary {
        let summary_path = args.output_dir.join("summary.csv");
        write_summary(&results, &summary_path)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let complete = results.iter().filter(|r| r.validation.is_complete).count();
    println!(
        "{} {}/{} records complete, {} save failures, total time {:.1}s",
        style("ℹ").blue(),
        complete,
        results.len(),
        save_failures,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn write_summary(results: &[BatchResult], path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "file",
        "has_policy_number",
        "has_policyholder",
        "has_dates",
        "has_financial_data",
        "is_complete",
        "processing_time_ms",
    ])?;

    for result in results {
        wtr.write_record([
            result.path.display().to_string(),
            result.validation.has_policy_number.to_string(),
            result.validation.has_policyholder.to_string(),
            result.validation.has_dates.to_string(),
            result.validation.has_financial_data.to_string(),
            result.validation.is_complete.to_string(),
            result.processing_time_ms.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
