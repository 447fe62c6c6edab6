//! Run loop over an input directory

use std::path::Path;
use std::time::Instant;

use crate::cli::path_mapping::map_input_to_output;
use crate::cli::CliUtils;
use crate::document::directory::{ensure_output_dir, find_json_files};
use crate::document::{load_document, save_document};
use crate::error::{ProcessingError, ProcessingResult};
use crate::pipeline::config::{ServiceErrorPolicy, TranslationConfig};
use crate::pipeline::stats::{FileStatistics, RunStatistics};
use crate::translation::Translator;
use crate::walker::{translate_document, ErrorLog};

/// Translates every JSON file of an input directory into an output directory
pub struct TranslationEngine<'a> {
    config: TranslationConfig,
    translator: &'a dyn Translator,
    quiet: bool,
}

impl<'a> TranslationEngine<'a> {
    /// Create a new engine
    pub fn new(config: TranslationConfig, translator: &'a dyn Translator) -> Self {
        Self {
            config,
            translator,
            quiet: false,
        }
    }

    /// Suppress non-error progress output
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// Error log shared by every file written under `output_dir`
    pub fn error_log(&self, output_dir: &Path) -> ErrorLog {
        ErrorLog::in_dir(output_dir, &self.config.error_log_name)
    }

    /// Load, translate and save a single file.
    ///
    /// The error variant tells the caller which step failed: `Load`, `Walk`
    /// or `Save`.
    pub fn process_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        error_log: &ErrorLog,
    ) -> ProcessingResult<FileStatistics> {
        let mut document = load_document(input_path)?;
        let stats = translate_document(
            &mut document,
            self.translator,
            &self.config,
            error_log,
            &file_label(output_path),
        )?;
        save_document(&document, output_path, self.config.indent_size)?;
        Ok(stats)
    }

    /// Process every JSON file in `input_dir`.
    ///
    /// Load and save failures are reported and the run moves on; fields of a
    /// file that could not be saved are not counted. Translator
    /// failures other than "not found" follow the configured
    /// [`ServiceErrorPolicy`].
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> ProcessingResult<RunStatistics> {
        let start_time = Instant::now();
        let mut stats = RunStatistics::new();

        tracing::info!(
            "Starting JSON translation process ({})",
            self.translator.languages()
        );

        let created = ensure_output_dir(output_dir).map_err(|e| {
            ProcessingError::io(
                format!("Failed to create output directory: {}", e),
                Some(output_dir.to_path_buf()),
            )
        })?;
        if created {
            CliUtils::show_info(
                &format!("Created output directory: {}", output_dir.display()),
                self.quiet,
            );
        }

        let error_log = self.error_log(output_dir);
        tracing::info!("Logging translation errors to: {}", error_log.path().display());

        let json_files = find_json_files(input_dir, self.config.recursive).map_err(|e| {
            ProcessingError::io(
                format!("Failed finding JSON files: {}", e),
                Some(input_dir.to_path_buf()),
            )
        })?;
        stats.files_found = json_files.len();

        if json_files.is_empty() {
            CliUtils::show_info(
                &format!("No JSON files found in {}", input_dir.display()),
                self.quiet,
            );
        } else {
            CliUtils::show_info(
                &format!("Found {} JSON files to process", json_files.len()),
                self.quiet,
            );
        }

        for input_path in json_files {
            let output_path = map_input_to_output(input_dir, &input_path, output_dir);
            let label = file_label(&output_path);
            tracing::debug!("Processing file: {}", input_path.display());

            let file_stats = match self.process_file(&input_path, &output_path, &error_log) {
                Ok(file_stats) => file_stats,
                Err(error @ ProcessingError::Load(_)) => {
                    stats.files_skipped += 1;
                    CliUtils::show_error(&error.user_message());
                    CliUtils::show_warning(
                        &format!("Skipping {} due to load error", label),
                        self.quiet,
                    );
                    continue;
                }
                Err(error @ ProcessingError::Walk(_)) => match self.config.on_service_error {
                    ServiceErrorPolicy::AbortRun => return Err(error),
                    ServiceErrorPolicy::SkipFile => {
                        stats.files_failed += 1;
                        CliUtils::show_error(&error.user_message());
                        CliUtils::show_warning(
                            &format!("Skipping {} due to translation error", label),
                            self.quiet,
                        );
                        continue;
                    }
                },
                Err(error) => {
                    stats.save_failures += 1;
                    CliUtils::show_error(&error.user_message());
                    continue;
                }
            };
            stats.record_fields(&file_stats);
            stats.files_written += 1;
            CliUtils::show_success(
                &format!(
                    "{} -> {} ({} translated, {} skipped, {} not found)",
                    input_path.display(),
                    output_path.display(),
                    file_stats.translated,
                    file_stats.skipped,
                    file_stats.not_found
                ),
                self.quiet,
            );
        }

        stats.finish(start_time.elapsed());
        tracing::info!("{}", stats.summary());
        Ok(stats)
    }
}

/// Name used for a document in error log lines
fn file_label(output_path: &Path) -> String {
    output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_path.display().to_string())
}
