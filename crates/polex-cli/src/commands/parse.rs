//! Parse command - extract data from a single policy document.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use polex_core::{OutputError, ParseReport, PolicyParser, TextAcquirer, export_json};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (.txt or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for the JSON record
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format printed to stdout
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Do not save the record to a file
    #[arg(long)]
    no_save: bool,

    /// Show the completeness assessment
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    // Parsing never fails; unreadable input degrades to an empty record.
    let acquirer = TextAcquirer::new().with_min_text_length(config.pdf.min_text_length);
    let parser = PolicyParser::new().with_acquirer(acquirer);
    let report = parser.parse_report(&args.input);
    debug!("parse took {}ms", report.processing_time_ms);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.record)?),
        OutputFormat::Text => print!("{}", format_text(&report)),
    }

    if args.validate {
        print_validation(&report);
    }

    if !args.no_save {
        let output_path = args
            .output
            .unwrap_or_else(|| PathBuf::from(&config.output.default_path));

        // Saving is the one loud failure path.
        export_json(&report.record, &output_path).map_err(|e| match e {
            OutputError::PermissionDenied(_) => anyhow::anyhow!("{}", e),
            OutputError::Write(_) => anyhow::anyhow!("unexpected error: {}", e),
        })?;

        println!(
            "{} Record saved to {}",
            style("✓").green(),
            output_path.display()
        );
    }

    Ok(())
}

fn format_text(report: &ParseReport) -> String {
    let record = &report.record;
    let mut output = String::new();

    output.push_str("Extraction Results:\n");
    for (name, value) in [
        ("policy_number", &record.policy_number),
        ("policyholder", &record.policyholder),
        ("policy_type", &record.policy_type),
        ("effective_date", &record.effective_date),
        ("expiration_date", &record.expiration_date),
        ("coverage_amount", &record.coverage_amount),
        ("premium", &record.premium),
        ("total_premium", &record.total_premium),
        ("taxes", &record.taxes),
        ("fees", &record.fees),
        ("deductible", &record.deductible),
        ("payment_frequency", &record.payment_frequency),
        ("copay", &record.copay),
    ] {
        match value {
            Some(value) => output.push_str(&format!("{} {}: {}\n", style("✓").green(), name, value)),
            None => output.push_str(&format!("{} {}: -\n", style("✗").red(), name)),
        }
    }

    output.push_str(&format!(
        "\nCoverage Details: {} items found\n",
        record.coverage_details.len()
    ));
    for item in &record.coverage_details {
        output.push_str(&format!("  - {}\n", item));
    }

    output
}

fn print_validation(report: &ParseReport) {
    let validation = &report.validation;

    println!("\nValidation Results:");
    for (name, value) in [
        ("has_policy_number", validation.has_policy_number),
        ("has_policyholder", validation.has_policyholder),
        ("has_dates", validation.has_dates),
        ("has_financial_data", validation.has_financial_data),
        ("is_complete", validation.is_complete),
    ] {
        let mark = if value {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("{} {}: {}", mark, name, value);
    }

    if validation.is_complete {
        println!("\n{} All critical fields extracted", style("✓").green());
    } else {
        println!(
            "\n{} Some fields are missing - document may be incomplete",
            style("⚠").yellow()
        );
    }
}
