//! Text generation providers.
//!
//! [`TextGenerator`] is the seam between the form generation action and the
//! model that writes the form definition. [`gemini::GeminiClient`] is the
//! production implementation; tests substitute their own.

pub mod config;
pub mod gemini;
pub mod provider;

pub use config::GenAiConfig;
pub use gemini::GeminiClient;
pub use provider::{GenAiError, TextGenerator};
