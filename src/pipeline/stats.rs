//! Statistics for translation runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Field counts for a single document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatistics {
    /// Fields replaced with a translation
    pub translated: usize,
    /// Fields left alone because they hold the skip value
    pub skipped: usize,
    /// Fields the translator had no translation for
    pub not_found: usize,
}

impl FileStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of sentinel fields seen
    pub fn fields_seen(&self) -> usize {
        self.translated + self.skipped + self.not_found
    }

    pub fn combine(&mut self, other: &Self) {
        self.translated += other.translated;
        self.skipped += other.skipped;
        self.not_found += other.not_found;
    }
}

/// Statistics for a whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatistics {
    /// JSON files found in the input directory
    pub files_found: usize,
    /// Files translated and written
    pub files_written: usize,
    /// Files skipped because they could not be loaded
    pub files_skipped: usize,
    /// Files abandoned after a translation service failure
    pub files_failed: usize,
    /// Files translated but not written
    pub save_failures: usize,
    /// Field counts summed over every walked document
    pub fields: FileStatistics,
    /// Wall time of the run in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self {
            files_found: 0,
            files_written: 0,
            files_skipped: 0,
            files_failed: 0,
            save_failures: 0,
            fields: FileStatistics::default(),
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl RunStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a walked document
    pub fn record_fields(&mut self, file: &FileStatistics) {
        self.fields.combine(file);
    }

    /// Stamp the run duration and collection time
    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    /// True when every found file was written
    pub fn is_clean(&self) -> bool {
        self.files_written == self.files_found
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Processed {} of {} files in {:.1}s - {} translated, {} skipped, {} not found",
            self.files_written,
            self.files_found,
            self.processing_time_ms as f32 / 1000.0,
            self.fields.translated,
            self.fields.skipped,
            self.fields.not_found
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
