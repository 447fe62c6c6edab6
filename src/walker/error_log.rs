use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{TranslateError, WalkError};

/// Append-only log of failed translations.
///
/// The file is opened, appended to and closed for every entry, so nothing is
/// held open between failures.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Log named `file_name` inside `dir`
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line (a newline is added)
    pub fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }

    /// Record a failed translation of `original` while processing `file_label`
    pub fn record_failure(
        &self,
        original: &str,
        file_label: &str,
        error: &TranslateError,
    ) -> Result<(), WalkError> {
        self.append(&format_failure(original, file_label, error))
            .map_err(|source| WalkError::ErrorLog {
                path: self.path.clone(),
                source,
            })
    }
}

/// Render a log line for a failed translation
pub fn format_failure(original: &str, file_label: &str, error: &dyn std::fmt::Display) -> String {
    format!("Failed to translate '{}' in {}: {}", original, file_label, error)
}
