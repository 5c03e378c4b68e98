// src/infrastructure/assistant.rs
use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TextGenerationError, TextGenerator};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// `generateContent` client for the Gemini REST API.
///
/// Holds no connection state until the first call: the `reqwest::Client` is
/// built lazily and then reused for the process lifetime. Without a usable
/// credential every call short-circuits to `Disabled` before any I/O.
pub struct GeminiTextGenerator {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: OnceLock<Client>,
}

impl GeminiTextGenerator {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
            client: OnceLock::new(),
        }
    }

    /// Point the client at a different endpoint (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(Client::new)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Concatenated text of the first candidate, or `None` when the reply carries
/// no usable text at all.
fn extract_text(payload: GenerateContentResponse) -> Option<String> {
    let content = payload.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, TextGenerationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(TextGenerationError::Disabled);
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| TextGenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "generateContent returned an error status");
            return Err(TextGenerationError::Api(format!("status {status}")));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| TextGenerationError::Transport(err.to_string()))?;

        Ok(extract_text(payload))
    }
}
