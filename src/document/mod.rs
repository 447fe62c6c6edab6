//! Loading and saving of JSON documents

pub mod directory;
pub mod filter;

use crate::error::{LoadError, LoadResult, ProcessingError, ProcessingResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;

/// Indentation used when writing translated documents
pub const DEFAULT_INDENT: usize = 4;

/// Load and parse a JSON document from disk
pub fn load_document(path: &Path) -> LoadResult<Value> {
    tracing::debug!("Loading JSON file: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        LoadError::new(format!("Failed to read file: {}", e), None).with_path(path.to_path_buf())
    })?;

    parse_document(&content).map_err(|e| e.with_path(path.to_path_buf()))
}

/// Parse a JSON document from a string
pub fn parse_document(content: &str) -> LoadResult<Value> {
    if content.trim().is_empty() {
        return Err(LoadError::new("Empty JSON document".to_string(), None));
    }

    serde_json::from_str(content).map_err(|e| {
        let location = (e.line() > 0).then(|| (e.line(), e.column()));
        LoadError::new(format!("Invalid JSON: {}", without_location(&e)), location)
    })
}

/// serde_json's message without its trailing "at line L column C"; the
/// location is carried separately on [`LoadError`]
fn without_location(e: &serde_json::Error) -> String {
    let message = e.to_string();
    let suffix = format!(" at line {} column {}", e.line(), e.column());
    match message.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => message,
    }
}

/// Serialize a document with `indent` spaces per level.
///
/// Non-ASCII text is written as UTF-8 rather than `\u` escapes.
pub fn render_document(document: &Value, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a document to `path`, replacing any existing file
pub fn save_document(document: &Value, path: &Path, indent: usize) -> ProcessingResult<()> {
    tracing::debug!("Saving translated JSON to: {}", path.display());

    let rendered = render_document(document, indent)
        .map_err(|e| ProcessingError::save(path.to_path_buf(), e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ProcessingError::save(path.to_path_buf(), e.to_string()))?;
    }

    std::fs::write(path, rendered)
        .map_err(|e| ProcessingError::save(path.to_path_buf(), e.to_string()))
}
