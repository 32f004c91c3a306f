/// Default model used for form generation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the Gemini REST API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text generation provider configuration.
#[derive(Clone)]
pub struct GenAiConfig {
    /// API key. `None` leaves the provider unconfigured; requests are then
    /// refused by the caller instead of failing at startup.
    pub api_key: Option<String>,
    /// Model identifier (default: `gemini-2.5-flash`).
    pub model: String,
    /// Base URL of the API, without a trailing slash.
    pub api_url: String,
}

impl std::fmt::Debug for GenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GenAiConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var          | Default                                             |
    /// |------------------|-----------------------------------------------------|
    /// | `GEMINI_API_KEY` | unset                                               |
    /// | `GEMINI_MODEL`   | `gemini-2.5-flash`                                  |
    /// | `GEMINI_API_URL` | `https://generativelanguage.googleapis.com/v1beta`  |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = lookup("GEMINI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());

        let api_url = lookup("GEMINI_API_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            model,
            api_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GenAiConfig::from_lookup(lookup_from(&[]));
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        let config = GenAiConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = GenAiConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-pro"),
            ("GEMINI_API_URL", "http://localhost:9000/v1/"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.api_url, "http://localhost:9000/v1");
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = GenAiConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "top-secret")]));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
