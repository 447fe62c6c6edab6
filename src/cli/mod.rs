//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ProcessingError, ProcessingResult};
use crate::pipeline::config::{ServiceErrorPolicy, TranslationConfig};
use crate::pipeline::stats::RunStatistics;
use crate::translation::{GlossaryTranslator, HttpTranslator, LanguagePair, ServiceConfig, Translator};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsontrans")]
#[command(about = "Translate \"Localized\" fields of JSON files from English to Swedish")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Directory containing the source JSON files
    #[arg(default_value = "v-clothingnames")]
    pub input_dir: PathBuf,

    /// Directory for translated JSON files and the error log
    #[arg(default_value = "output")]
    pub output_dir: PathBuf,

    /// Source language code
    #[arg(long, default_value = "en")]
    pub source: String,

    /// Target language code
    #[arg(long, default_value = "sv")]
    pub target: String,

    /// Base URL of a LibreTranslate-compatible service
    #[arg(long, env = "JSONTRANS_ENDPOINT", default_value = "http://localhost:5000")]
    pub endpoint: String,

    /// API key for the translation service
    #[arg(long, env = "JSONTRANS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Translate from a local JSON glossary instead of the service
    #[arg(long)]
    pub glossary: Option<PathBuf>,

    /// Field name whose string value is translated
    #[arg(long, default_value = "Localized")]
    pub sentinel_key: String,

    /// Field value that is never translated
    #[arg(long, default_value = "NULL")]
    pub skip_value: String,

    /// What to do when the translation service fails
    #[arg(long, value_enum, default_value_t = OnServiceError::AbortRun)]
    pub on_service_error: OnServiceError,

    /// Recursively process subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Output run statistics
    #[arg(long)]
    pub stats: bool,

    /// Write run statistics as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Service failure policies for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnServiceError {
    #[value(name = "abort-run", alias = "abort")]
    AbortRun,
    #[value(name = "skip-file", alias = "skip")]
    SkipFile,
}

impl From<OnServiceError> for ServiceErrorPolicy {
    fn from(policy: OnServiceError) -> Self {
        match policy {
            OnServiceError::AbortRun => ServiceErrorPolicy::AbortRun,
            OnServiceError::SkipFile => ServiceErrorPolicy::SkipFile,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub translation_config: TranslationConfig,
    pub service_config: ServiceConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ProcessingResult<Self> {
        let translation_config = TranslationConfig::default()
            .with_languages(LanguagePair::new(&args.source, &args.target))
            .with_sentinel_key(&args.sentinel_key)
            .with_skip_value(&args.skip_value)
            .with_service_error_policy(args.on_service_error.into())
            .with_recursive(args.recursive);
        translation_config
            .validate()
            .map_err(ProcessingError::configuration)?;

        let service_config = ServiceConfig::default()
            .with_endpoint(&args.endpoint)
            .with_api_key(args.api_key.clone())
            .with_timeout(Duration::from_secs(args.timeout));
        if args.glossary.is_none() {
            service_config
                .validate()
                .map_err(ProcessingError::configuration)?;
        }

        Ok(Self {
            args,
            translation_config,
            service_config,
        })
    }

    /// Build the translator selected by the arguments
    pub fn build_translator(&self) -> ProcessingResult<Box<dyn Translator>> {
        let languages = self.translation_config.languages.clone();

        match &self.args.glossary {
            Some(path) => {
                let glossary = GlossaryTranslator::from_file(path, languages)?;
                tracing::info!(
                    "Using glossary {} with {} entries",
                    path.display(),
                    glossary.len()
                );
                Ok(Box::new(glossary))
            }
            None => {
                let client = HttpTranslator::new(self.service_config.clone(), languages)
                    .map_err(|e| {
                        ProcessingError::configuration(format!(
                            "Cannot create translation client: {}",
                            e
                        ))
                    })?;
                tracing::info!("Using translation service at {}", self.service_config.endpoint);
                Ok(Box::new(client))
            }
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.args.verbose {
            "debug"
        } else if self.args.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show a plain progress message (if not in quiet mode)
    pub fn show_info(message: &str, quiet: bool) {
        if !quiet {
            println!("{}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Print a run summary
    pub fn show_statistics(stats: &RunStatistics, quiet: bool) {
        if quiet {
            return;
        }

        println!("\nTranslation Statistics:");
        println!("Files found: {}", stats.files_found);
        println!("Files written: {}", stats.files_written);
        println!("Files skipped (load errors): {}", stats.files_skipped);
        println!("Files failed (service errors): {}", stats.files_failed);
        println!("Save failures: {}", stats.save_failures);
        println!("Fields translated: {}", stats.fields.translated);
        println!("Fields skipped: {}", stats.fields.skipped);
        println!("Fields not found: {}", stats.fields.not_found);
        println!(
            "Processing time: {}",
            Self::format_duration(Duration::from_millis(stats.processing_time_ms))
        );
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ProcessingError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ProcessingError::Walk(_) => {
            eprintln!("\nTip: Use --on-service-error skip-file to keep going past service failures");
        }
        ProcessingError::Configuration { .. } => {
            eprintln!("\nTip: Use --glossary to translate without a translation service");
        }
        _ => {}
    }

    eprintln!("\nTry 'jsontrans --help' for usage information.");
}
