//! Command implementations for the roster ingest CLI
//!
//! Contains the command execution logic: logging setup, configuration
//! layering, store selection, progress reporting, and the end-of-run
//! summary with the age distribution table.

use std::time::Instant;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tracing::{debug, info};

use crate::app::adapters::postgres::PostgresStore;
use crate::app::adapters::store::{MemoryStore, RecordStore};
use crate::app::services::age_stats::{AgeBucket, AgeCounters};
use crate::app::services::ingestor::IngestPipeline;
use crate::cli::args::{Args, Commands, OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::{Error, IngestReport, Result};

/// Main command runner
pub async fn run(args: Args) -> Result<IngestReport> {
    match args.command {
        Some(Commands::Process(process)) => run_process(process).await,
        None => Err(Error::configuration("no command provided")),
    }
}

/// Execute the process command end to end
async fn run_process(args: ProcessArgs) -> Result<IngestReport> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting roster ingest");
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let csv_path = config.csv_path.clone();
    if !csv_path.exists() {
        return Err(Error::file_not_found(csv_path.display().to_string()));
    }

    let store: Box<dyn RecordStore> = if args.dry_run {
        info!("Dry run: records will not be written to PostgreSQL");
        Box::new(MemoryStore::new())
    } else {
        Box::new(PostgresStore::connect(&config.database).await?)
    };

    let pipeline = IngestPipeline::new(store, config.batch_size);

    let progress_bar = if args.show_progress() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Processing {}", csv_path.display()));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = pipeline.run(&csv_path).await;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let report = result?;

    match args.format {
        OutputFormat::Text => print_text_summary(&report, start_time.elapsed()),
        OutputFormat::Json => print_json_summary(&report),
    }

    Ok(report)
}

/// Set up tracing to stderr with level from the verbosity flags
fn setup_logging(args: &ProcessArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_ingest={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Load layered configuration and apply CLI overrides
fn load_configuration(args: &ProcessArgs) -> Result<Config> {
    let mut config = Config::load(args.config_file.as_deref())?;

    if let Some(csv_path) = &args.csv_path {
        config.csv_path = csv_path.clone();
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }

    Ok(config)
}

/// Print the human-readable end-of-run summary
fn print_text_summary(report: &IngestReport, elapsed: std::time::Duration) {
    println!();
    println!("{}", "Roster ingestion complete".bold());
    println!(
        "  Records processed: {}",
        report.total_processed.to_string().green()
    );
    println!("  Elapsed: {:.2?}", elapsed);

    print_age_distribution(&report.age_counters);
}

/// Print the age distribution table
///
/// Percentages are relative to the total record count; with no records the
/// table is skipped instead of dividing by zero.
fn print_age_distribution(counters: &AgeCounters) {
    let total = counters.total();
    if total == 0 {
        println!("\nNo records processed; cannot compute distribution.");
        return;
    }

    println!("\n{}", "=== Age distribution report ===".bold());
    println!("{:<10} {:>14} {:>9}", "Age-Group", "% Distribution", "Count");
    for bucket in AgeBucket::ALL {
        let count = counters.count(bucket);
        let pct = count as f64 / total as f64 * 100.0;
        println!("{:<10} {:>13.2}% {:>9}", bucket.label(), pct, count);
    }
    println!("{}", "================================".bold());
}

/// Print the summary as a single JSON document on stdout
fn print_json_summary(report: &IngestReport) {
    let summary = json!({
        "total_processed": report.total_processed,
        "age_counters": report.age_counters,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serialization cannot fail")
    );
}
