//! Recursive walk over a JSON document that translates sentinel fields
//!
//! Every mapping reachable through nested mappings is visited depth-first in
//! document order. A string stored under the sentinel key is sent to the
//! translator unless it equals the skip value. Arrays are never entered.

pub mod error_log;

pub use error_log::ErrorLog;

use serde_json::{Map, Value};

use crate::error::WalkError;
use crate::pipeline::config::TranslationConfig;
use crate::pipeline::stats::FileStatistics;
use crate::translation::Translator;

/// Walks one document, translating fields in place
pub struct TreeWalker<'a> {
    translator: &'a dyn Translator,
    config: &'a TranslationConfig,
    error_log: &'a ErrorLog,
    file_label: &'a str,
    stats: FileStatistics,
}

impl<'a> TreeWalker<'a> {
    /// `file_label` names the document in error log lines
    pub fn new(
        translator: &'a dyn Translator,
        config: &'a TranslationConfig,
        error_log: &'a ErrorLog,
        file_label: &'a str,
    ) -> Self {
        Self {
            translator,
            config,
            error_log,
            file_label,
            stats: FileStatistics::new(),
        }
    }

    /// Translate every eligible field under `root`.
    ///
    /// "Not found" failures are logged and the field keeps its text. Any
    /// other failure stops the walk and is returned; fields translated
    /// before it keep their new values.
    pub fn walk(mut self, root: &mut Value) -> Result<FileStatistics, WalkError> {
        if let Value::Object(map) = root {
            self.visit(map)?;
        }
        Ok(self.stats)
    }

    fn visit(&mut self, map: &mut Map<String, Value>) -> Result<(), WalkError> {
        for (key, value) in map.iter_mut() {
            match value {
                Value::String(text) if *key == self.config.sentinel_key => {
                    self.translate_field(text)?
                }
                Value::Object(children) => self.visit(children)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn translate_field(&mut self, text: &mut String) -> Result<(), WalkError> {
        if *text == self.config.skip_value {
            tracing::debug!(
                "Skipping translation for '{}' in {} field",
                text,
                self.config.sentinel_key
            );
            self.stats.skipped += 1;
            return Ok(());
        }

        match self.translator.translate(text.as_str()) {
            Ok(translated) => {
                tracing::debug!("Translating: '{}' -> '{}'", text, translated);
                *text = translated;
                self.stats.translated += 1;
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(
                    "Translation failed for '{}' in {}: {}",
                    text,
                    self.file_label,
                    err
                );
                self.error_log
                    .record_failure(text.as_str(), self.file_label, &err)?;
                self.stats.not_found += 1;
            }
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }
}

/// Translate `document` in place with a fresh [`TreeWalker`]
pub fn translate_document(
    document: &mut Value,
    translator: &dyn Translator,
    config: &TranslationConfig,
    error_log: &ErrorLog,
    file_label: &str,
) -> Result<FileStatistics, WalkError> {
    TreeWalker::new(translator, config, error_log, file_label).walk(document)
}
