//! Error types and handling infrastructure for JSON translation

use std::fmt;
use std::path::PathBuf;

/// Message reported when the service has no translation for a text
pub const NOT_FOUND_MESSAGE: &str =
    "No translation was found using the current translator. Try another translator?";

/// Failures raised by a [`Translator`](crate::translation::Translator)
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The service answered, but has no translation for the text
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Translation service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from translation service: {message}")]
    InvalidResponse { message: String },

    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },
}

impl TranslateError {
    pub fn service(status: u16, message: String) -> Self {
        Self::Service { status, message }
    }

    pub fn invalid_response(message: String) -> Self {
        Self::InvalidResponse { message }
    }

    pub fn invalid_payload(message: String) -> Self {
        Self::InvalidPayload { message }
    }

    /// True for the one failure kind the walker recovers from
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Failures while walking a single document
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error(transparent)]
    Translation(#[from] TranslateError),

    #[error("Failed to append to error log {}: {source}", .path.display())]
    ErrorLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// JSON loading errors
#[derive(Debug, Clone)]
pub struct LoadError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub path: Option<PathBuf>,
}

impl LoadError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

/// Main error type for per-file processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("Failed to save {}: {message}", .path.display())]
    Save { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ProcessingError {
    pub fn save(path: PathBuf, message: String) -> Self {
        Self::Save { path, message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(err) => match &err.path {
                Some(path) => format!("Error loading {}: {}", display_name(path), err),
                None => format!("Error loading JSON: {}", err),
            },
            Self::Walk(WalkError::Translation(err)) => {
                format!("Translation service error: {}", err)
            }
            Self::Walk(err @ WalkError::ErrorLog { .. }) => err.to_string(),
            Self::Save { path, message } => {
                format!("Error saving {}: {}", display_name(path), message)
            }
            Self::Io {
                message,
                path: Some(path),
            } => format!("{}: {}", path.display(), message),
            _ => self.to_string(),
        }
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Result type for per-file processing
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Convenience result type for loading operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience result type for translator calls
pub type TranslateResult<T> = Result<T, TranslateError>;
