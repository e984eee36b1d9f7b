//! Ordertrack CLI — run the pipeline, render reports, generate samples.
//!
//! Commands:
//! - `run` — process an order table, print the summary, save artifacts
//! - `report` — render the Markdown report from a saved manifest
//! - `sample` — write a deterministic sample input table

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use ordertrack_core::domain::OrderStatus;
use ordertrack_runner::{
    generate_report, load_manifest, run_pipeline, save_artifacts, write_sample_csv,
    PipelineConfig,
};

#[derive(Parser)]
#[command(
    name = "ordertrack",
    about = "Ordertrack CLI — order delivery status pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an order table and save the snapshot and manifest.
    Run {
        /// Path to the input CSV.
        input: PathBuf,

        /// Path to a TOML pipeline config. Defaults to the standard one.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Reference instant, "YYYY-MM-DD" or "YYYY-MM-DD HH:MM:SS".
        /// Defaults to the current local time, captured once.
        #[arg(long)]
        as_of: Option<String>,

        /// Output directory for artifacts.
        #[arg(long, default_value = "artifacts")]
        output_dir: PathBuf,
    },
    /// Render the Markdown report from a saved artifact directory.
    Report {
        /// Artifact directory containing manifest.json.
        dir: PathBuf,
    },
    /// Write a deterministic sample input table.
    Sample {
        /// Output CSV path.
        output: PathBuf,

        /// Number of data rows.
        #[arg(long, default_value_t = 100)]
        rows: usize,

        /// Seed label; the same label always produces the same file.
        #[arg(long, default_value = "demo")]
        label: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            input,
            config,
            as_of,
            output_dir,
        } => run_cmd(input, config, as_of, output_dir),
        Commands::Report { dir } => report_cmd(&dir),
        Commands::Sample {
            output,
            rows,
            label,
        } => sample_cmd(&output, rows, &label),
    }
}

fn run_cmd(
    input: PathBuf,
    config_path: Option<PathBuf>,
    as_of: Option<String>,
    output_dir: PathBuf,
) -> Result<()> {
    let config = match config_path {
        Some(path) => PipelineConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PipelineConfig::standard(),
    };

    let reference = match as_of {
        Some(s) => parse_reference(&s)
            .with_context(|| format!("invalid --as-of value '{s}'"))?,
        None => Local::now().naive_local(),
    };

    let run = run_pipeline(&input, reference, &config)
        .with_context(|| format!("processing {}", input.display()))?;

    let summary = &run.result.summary;
    println!("Processed {} rows from {}", summary.row_count, input.display());
    println!("Distinct orders: {}", summary.distinct_orders);
    for status in OrderStatus::ALL {
        let bucket = summary.of(status);
        println!(
            "  {:<10} {:>6} rows  {:>14.2}",
            status.to_string(),
            bucket.count,
            bucket.total_value
        );
    }
    if !run.result.data_quality_warnings.is_empty() {
        println!(
            "Data quality warnings: {}",
            run.result.data_quality_warnings.len()
        );
    }

    let written = save_artifacts(&run, &output_dir).context("saving artifacts")?;
    info!(dir = %written.display(), "artifacts saved");
    println!("Artifacts written to {}", written.display());
    Ok(())
}

fn report_cmd(dir: &PathBuf) -> Result<()> {
    let result = load_manifest(dir)
        .with_context(|| format!("loading manifest from {}", dir.display()))?;
    print!("{}", generate_report(&result));
    Ok(())
}

fn sample_cmd(output: &PathBuf, rows: usize, label: &str) -> Result<()> {
    let config = PipelineConfig::standard();
    write_sample_csv(output, rows, label, &config)
        .with_context(|| format!("writing sample table to {}", output.display()))?;
    println!("Wrote {rows} sample rows to {}", output.display());
    Ok(())
}

/// Parse the `--as-of` override: a date (taken at midnight) or a full
/// timestamp.
fn parse_reference(s: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .context("expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")?;
    Ok(date.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
}
