//! REST client for the Gemini `generateContent` endpoint.
//!
//! Sends a single user turn and concatenates the text parts of the first
//! candidate. No streaming and no retries; failures are returned to the
//! caller as [`GenAiError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GenAiConfig;
use crate::provider::{GenAiError, TextGenerator};

/// Header carrying the API key (keeps the key out of request URLs and logs).
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One conversation turn.
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only text parts are produced or consumed here.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single generated candidate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

impl GenerateContentRequest {
    /// A request holding one user turn with a single text part.
    pub fn user_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if it has any text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl GeminiClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GenAiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenAiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenAiError::NotConfigured)?;

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await?;

        let body: GenerateContentResponse = Self::parse_response(response).await?;

        let finish_reason = body
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("unknown");
        tracing::debug!(
            model = %self.config.model,
            candidates = body.candidates.len(),
            finish_reason,
            "Received generateContent response"
        );

        body.text().ok_or(GenAiError::EmptyResponse)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
