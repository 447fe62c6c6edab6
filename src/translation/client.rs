//! Blocking client for LibreTranslate-compatible services

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{TranslateError, TranslateResult};
use crate::translation::{prepare_text, LanguagePair, PreparedText, Translator, MAX_TEXT_CHARS};

/// Connection settings for the translation service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL; requests go to `{endpoint}/translate`
    pub endpoint: String,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Texts of this many characters or more are not sent
    pub max_chars: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_chars: MAX_TEXT_CHARS,
        }
    }
}

impl ServiceConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!(
                "Endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ));
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_chars == 0 {
            return Err("Maximum text length must be at least 1".to_string());
        }

        Ok(())
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.endpoint.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

/// Translator backed by an HTTP translation service
#[derive(Debug)]
pub struct HttpTranslator {
    client: Client,
    config: ServiceConfig,
    languages: LanguagePair,
}

impl HttpTranslator {
    pub fn new(config: ServiceConfig, languages: LanguagePair) -> TranslateResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            languages,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str) -> TranslateResult<String> {
        let query = match prepare_text(text, &self.languages, self.config.max_chars)? {
            PreparedText::Query(query) => query,
            PreparedText::Unchanged(text) => return Ok(text.to_string()),
        };

        let request = TranslateRequest {
            q: query,
            source: &self.languages.source,
            target: &self.languages.target,
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let response = self
            .client
            .post(self.config.translate_url())
            .json(&request)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        interpret_response(status, &body)
    }

    fn languages(&self) -> &LanguagePair {
        &self.languages
    }
}

/// Map a service answer onto a translation or a [`TranslateError`]
fn interpret_response(status: u16, body: &str) -> TranslateResult<String> {
    if status == 404 {
        return Err(TranslateError::NotFound);
    }

    let parsed: Option<TranslateResponse> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        let message = parsed
            .and_then(|r| r.error)
            .unwrap_or_else(|| body.trim().to_string());
        return Err(TranslateError::service(status, message));
    }

    let parsed = parsed.ok_or_else(|| {
        TranslateError::invalid_response(format!("expected a JSON object, got '{}'", body.trim()))
    })?;

    match parsed.translated_text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(TranslateError::NotFound),
    }
}
