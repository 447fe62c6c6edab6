//! JSON Localization Translator
//!
//! A Rust CLI tool that walks JSON documents, translates every `"Localized"`
//! field through a translation service and writes the results to a parallel
//! output directory.

pub mod cli;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod translation;
pub mod walker;

// Re-export commonly used types
pub use error::{LoadError, ProcessingError, TranslateError, WalkError};
pub use pipeline::{
    FileStatistics, RunStatistics, ServiceErrorPolicy, TranslationConfig, TranslationEngine,
};
pub use translation::{GlossaryTranslator, HttpTranslator, LanguagePair, Translator};
pub use walker::{translate_document, ErrorLog, TreeWalker};

/// Translate a parsed document in place with default configuration.
///
/// Texts the translator has no translation for are appended to `error_log`.
pub fn translate_json(
    json: &mut serde_json::Value,
    translator: &dyn Translator,
    error_log: &ErrorLog,
    file_label: &str,
) -> Result<FileStatistics, WalkError> {
    let config = TranslationConfig::default();
    translate_document(json, translator, &config, error_log, file_label)
}
