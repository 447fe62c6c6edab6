//! Configuration options for a translation run

use crate::document::DEFAULT_INDENT;
use crate::translation::LanguagePair;

/// Field name whose string value gets translated
pub const DEFAULT_SENTINEL_KEY: &str = "Localized";

/// Field value that suppresses translation
pub const DEFAULT_SKIP_VALUE: &str = "NULL";

/// Name of the shared error log inside the output directory
pub const DEFAULT_ERROR_LOG_NAME: &str = "translation_errors.log";

/// What to do when the translator fails with anything other than "not found"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceErrorPolicy {
    /// Stop the whole run
    #[default]
    AbortRun,
    /// Report the file, leave it unwritten and move on
    SkipFile,
}

/// Translation run configuration
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// Source and target languages
    pub languages: LanguagePair,
    /// Key marking a translatable field
    pub sentinel_key: String,
    /// Value that is never sent for translation
    pub skip_value: String,
    /// File name of the error log, created inside the output directory
    pub error_log_name: String,
    /// Spaces per indentation level in written documents
    pub indent_size: usize,
    /// Policy for translator failures other than "not found"
    pub on_service_error: ServiceErrorPolicy,
    /// Descend into subdirectories of the input directory
    pub recursive: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            languages: LanguagePair::default(),
            sentinel_key: DEFAULT_SENTINEL_KEY.to_string(),
            skip_value: DEFAULT_SKIP_VALUE.to_string(),
            error_log_name: DEFAULT_ERROR_LOG_NAME.to_string(),
            indent_size: DEFAULT_INDENT,
            on_service_error: ServiceErrorPolicy::AbortRun,
            recursive: false,
        }
    }
}

impl TranslationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_languages(mut self, languages: LanguagePair) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_sentinel_key(mut self, key: impl Into<String>) -> Self {
        self.sentinel_key = key.into();
        self
    }

    pub fn with_skip_value(mut self, value: impl Into<String>) -> Self {
        self.skip_value = value.into();
        self
    }

    pub fn with_error_log_name(mut self, name: impl Into<String>) -> Self {
        self.error_log_name = name.into();
        self
    }

    pub fn with_service_error_policy(mut self, policy: ServiceErrorPolicy) -> Self {
        self.on_service_error = policy;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.languages.source.trim().is_empty() || self.languages.target.trim().is_empty() {
            return Err("Source and target languages must not be empty".to_string());
        }

        if self.sentinel_key.is_empty() {
            return Err("Sentinel key must not be empty".to_string());
        }

        if self.indent_size == 0 || self.indent_size > 8 {
            return Err("Indent size must be 1-8 spaces".to_string());
        }

        if self.error_log_name.is_empty()
            || self.error_log_name.contains(['/', '\\'])
            || self.error_log_name == "."
            || self.error_log_name == ".."
        {
            return Err(format!(
                "Error log name must be a plain file name, got '{}'",
                self.error_log_name
            ));
        }

        Ok(())
    }
}
