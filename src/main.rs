use clap::Parser;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use jsontrans::cli::{handle_error, Args, CliConfig, CliUtils};
use jsontrans::pipeline::{RunStatistics, TranslationEngine};
use jsontrans::ProcessingError;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    // Set up logging
    init_tracing(config.log_filter());

    match run(&config) {
        Ok(stats) => {
            if config.want_stats() {
                CliUtils::show_statistics(&stats, config.is_quiet());
            }
            if let Some(report) = &config.args.report {
                write_report(&stats, report)?;
            }
            CliUtils::show_info("All JSON files processed", config.is_quiet());
            Ok(())
        }
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &CliConfig) -> Result<RunStatistics, ProcessingError> {
    let translator = config.build_translator()?;
    let engine = TranslationEngine::new(config.translation_config.clone(), translator.as_ref())
        .with_quiet(config.is_quiet());

    engine.run(&config.args.input_dir, &config.args.output_dir)
}

fn write_report(stats: &RunStatistics, path: &Path) -> Result<()> {
    let json = stats.to_json().context("Failed to serialize statistics")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
