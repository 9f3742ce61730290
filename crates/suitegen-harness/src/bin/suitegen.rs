//! CLI entrypoint for the suitegen fixture-suite tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use suitegen_core::{SuiteConfig, SuiteModel, check, render};
use suitegen_harness::nav::format_reference;
use suitegen_harness::report::DriftReport;
use suitegen_harness::run_log::{LogEmitter, LogEntry, LogLevel, Outcome, now_utc};

/// Fixture-suite tooling for generated test classes.
#[derive(Debug, Parser)]
#[command(name = "suitegen")]
#[command(about = "Fixture-suite discovery, generation, and drift checking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print navigable references for every fixture under the configured root.
    Scan {
        /// Suite configuration JSON path.
        #[arg(long)]
        config: PathBuf,
    },
    /// Scan the root and write the suite model (and optional generator descriptors).
    Generate {
        /// Suite configuration JSON path.
        #[arg(long)]
        config: PathBuf,
        /// Output path for the suite model JSON.
        #[arg(long)]
        output: PathBuf,
        /// Optional output path for the generator descriptor tree JSON.
        #[arg(long)]
        descriptors: Option<PathBuf>,
        /// Optional structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Check a previously generated suite model against the current disk state.
    Check {
        /// Suite configuration JSON path.
        #[arg(long)]
        config: PathBuf,
        /// Previously generated suite model JSON.
        #[arg(long)]
        model: PathBuf,
        /// Optional output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
        /// Optional structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { config } => {
            let config = SuiteConfig::from_file(&config)?;
            let scan = config.scan()?;
            for path in scan.normalized_paths() {
                println!("{}", format_reference(&config.root, &path));
            }
            eprintln!("{} fixture(s) under {}", scan.paths.len(), config.root.display());
        }
        Command::Generate {
            config,
            output,
            descriptors,
            log,
        } => {
            let config = SuiteConfig::from_file(&config)?;
            let model = config.generate()?;
            let count = model.fixture_paths().len();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, model.to_json()?)?;
            eprintln!("Wrote suite model ({count} fixtures) to {}", output.display());

            if let Some(path) = descriptors {
                let descriptor = render(&model);
                std::fs::write(&path, serde_json::to_string_pretty(&descriptor)?)?;
                eprintln!("Wrote generator descriptors to {}", path.display());
            }

            if let Some(path) = log {
                let mut emitter = LogEmitter::to_file(&path, &config.suite, "generate")?;
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "model_generated")
                        .with_outcome(Outcome::Pass)
                        .with_details(serde_json::json!({ "fixtures": count })),
                )?;
                emitter.flush()?;
            }
        }
        Command::Check {
            config,
            model,
            report,
            timestamp,
            log,
        } => {
            let config = SuiteConfig::from_file(&config)?;
            let model = SuiteModel::from_file(&model)?;
            let pattern = config.compiled_pattern()?;
            let coverage = check(&model, &config.root, &pattern)?;
            let clean = coverage.is_clean();

            if let Some(path) = log {
                let mut emitter = LogEmitter::to_file(&path, &config.suite, "check")?;
                emitter.emit_entry(
                    LogEntry::new("", LogLevel::Info, "drift_check")
                        .with_outcome(if clean { Outcome::Pass } else { Outcome::Fail })
                        .with_details(serde_json::to_value(&coverage)?),
                )?;
                emitter.flush()?;
            }

            let report_doc = DriftReport::new(
                &config.suite,
                timestamp.unwrap_or_else(now_utc),
                coverage.clone(),
            );
            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if let Err(drift) = coverage.into_result() {
                return Err(drift.to_string().into());
            }
            eprintln!("Coverage clean: {}", config.suite);
        }
    }

    Ok(())
}
