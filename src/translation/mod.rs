//! Translation clients
//!
//! The walker only sees the [`Translator`] trait. [`HttpTranslator`] talks to a
//! LibreTranslate-compatible service, [`GlossaryTranslator`] answers from a
//! local JSON table.

pub mod client;
pub mod glossary;

pub use client::{HttpTranslator, ServiceConfig};
pub use glossary::GlossaryTranslator;

use crate::error::{TranslateError, TranslateResult};

/// Texts of this many characters or more are rejected
pub const MAX_TEXT_CHARS: usize = 5000;

/// A translation capability bound to one source/target language pair
pub trait Translator {
    /// Translate `text`, or fail with [`TranslateError::NotFound`] when no
    /// translation exists.
    fn translate(&self, text: &str) -> TranslateResult<String>;

    /// Languages this translator converts between
    fn languages(&self) -> &LanguagePair;
}

/// Source and target language codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "sv")
    }
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// True when translating would be a no-op
    pub fn is_identity(&self) -> bool {
        self.source.eq_ignore_ascii_case(&self.target)
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Outcome of [`prepare_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparedText<'a> {
    /// Return this text as the translation without a request
    Unchanged(&'a str),
    /// Send this text to the translator
    Query(&'a str),
}

/// Input rules shared by every translator.
///
/// Text is trimmed first; blank text and same-language pairs come back as
/// [`PreparedText::Unchanged`].
pub fn prepare_text<'a>(
    text: &'a str,
    languages: &LanguagePair,
    max_chars: usize,
) -> TranslateResult<PreparedText<'a>> {
    let length = text.chars().count();
    if length >= max_chars {
        return Err(TranslateError::invalid_payload(format!(
            "text is {} characters long (must be under {})",
            length, max_chars
        )));
    }

    let trimmed = text.trim();
    if trimmed.is_empty() || languages.is_identity() {
        return Ok(PreparedText::Unchanged(trimmed));
    }

    Ok(PreparedText::Query(trimmed))
}
