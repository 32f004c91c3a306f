//! Form generation request validation and prompt composition.
//!
//! The inbound request carries a single free-text `description`. It is
//! validated with the `validator` derive, and validation failures are
//! flattened into [`FieldError`] entries that can be returned to the caller
//! as-is.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a form description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Fixed instruction sent ahead of every user description.
pub const FORM_PROMPT: &str = "Create a JSON form with the following fields: title, fields \
    (If any field includes options, keep them inside an array, not an object), button.";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// An inbound form generation request.
///
/// A missing `description` deserializes to an empty string so that it is
/// reported by validation rather than rejected by the decoder.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerationRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Description is required"),
        custom(function = "validate_description_length")
    )]
    pub description: String,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field (e.g. `"description"`).
    pub field: String,
    /// Machine-readable validator code (e.g. `"length"`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

fn validate_description_length(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        let mut err = ValidationError::new("max_length");
        err.message = Some(
            format!("Description must be at most {MAX_DESCRIPTION_LENGTH} characters").into(),
        );
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a generation request, returning per-field errors on failure.
pub fn validate_request(request: &GenerationRequest) -> Result<(), Vec<FieldError>> {
    request.validate().map_err(|errs| to_field_errors(&errs))
}

/// Flatten `validator` errors into a stable, field-sorted list.
pub fn to_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                code: e.code.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}")),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

// ---------------------------------------------------------------------------
// Prompt
// ---------------------------------------------------------------------------

/// Build the full prompt sent to the text generation provider.
pub fn compose_prompt(description: &str) -> String {
    format!("{FORM_PROMPT} {description}")
}

/// Best-effort title of a generated form, used for logging.
pub fn form_title(content: &serde_json::Value) -> Option<&str> {
    content.get("title").and_then(|t| t.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
