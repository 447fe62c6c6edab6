use std::collections::HashMap;
use std::path::Path;

use crate::document::load_document;
use crate::error::{LoadError, LoadResult, TranslateError, TranslateResult};
use crate::translation::{prepare_text, LanguagePair, PreparedText, Translator, MAX_TEXT_CHARS};

/// Offline translator answering from a fixed source -> target table
#[derive(Debug, Clone, Default)]
pub struct GlossaryTranslator {
    entries: HashMap<String, String>,
    languages: LanguagePair,
}

impl GlossaryTranslator {
    pub fn new(languages: LanguagePair) -> Self {
        Self {
            entries: HashMap::new(),
            languages,
        }
    }

    /// Build a glossary from `(source, translation)` pairs
    pub fn from_pairs<I, S, T>(languages: LanguagePair, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(source, target)| (source.into(), target.into()))
            .collect();
        Self { entries, languages }
    }

    /// Load a glossary file holding a flat JSON object of strings
    pub fn from_file(path: &Path, languages: LanguagePair) -> LoadResult<Self> {
        let value = load_document(path)?;
        let object = value.as_object().ok_or_else(|| {
            LoadError::new("Glossary must be a JSON object".to_string(), None)
                .with_path(path.to_path_buf())
        })?;

        let mut entries = HashMap::with_capacity(object.len());
        for (source, target) in object {
            let target = target.as_str().ok_or_else(|| {
                LoadError::new(
                    format!("Glossary entry '{}' is not a string", source),
                    None,
                )
                .with_path(path.to_path_buf())
            })?;
            entries.insert(source.clone(), target.to_string());
        }

        Ok(Self { entries, languages })
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for GlossaryTranslator {
    fn translate(&self, text: &str) -> TranslateResult<String> {
        let query = match prepare_text(text, &self.languages, MAX_TEXT_CHARS)? {
            PreparedText::Query(query) => query,
            PreparedText::Unchanged(text) => return Ok(text.to_string()),
        };

        self.entries
            .get(query)
            .cloned()
            .ok_or(TranslateError::NotFound)
    }

    fn languages(&self) -> &LanguagePair {
        &self.languages
    }
}
