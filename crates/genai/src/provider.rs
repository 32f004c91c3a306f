//! The text generation provider trait and its error type.

use async_trait::async_trait;

/// Errors from a text generation provider.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// No API credential is configured.
    #[error("Text generation provider is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered but produced no text.
    #[error("Provider returned no text")]
    EmptyResponse,
}

/// A service that turns a prompt into generated text.
///
/// Implementations are shared across requests behind an `Arc<dyn _>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether an access credential is available.
    fn is_configured(&self) -> bool;

    /// Send a single prompt and return the raw generated text.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError>;
}
