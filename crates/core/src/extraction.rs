//! Extraction of a JSON object from free-form model output.
//!
//! Models often wrap the requested JSON in commentary ("Sure! Here is your
//! form: ...") or markdown fences. The extractor scans the text for
//! top-level balanced `{ ... }` groups and returns the first one that parses
//! as JSON.
//!
//! Only top-level groups are candidates. When a group fails to parse, the
//! scan resumes after its closing brace, so an object nested inside a
//! malformed payload is never mistaken for the payload itself. A `{` that is
//! never closed is skipped and the scan resumes right after it.

use serde_json::Value;

/// Why no payload could be extracted.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The text holds no balanced `{ ... }` group at all.
    #[error("no JSON object found in generated text")]
    Empty,

    /// Candidates exist but none parse. Carries the first candidate's error.
    #[error("generated JSON is invalid: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// Extract and parse the first valid top-level JSON object in `raw`.
pub fn extract_form_payload(raw: &str) -> Result<Value, ExtractError> {
    let mut first_error = None;

    for candidate in object_candidates(raw) {
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => return Ok(value),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(ExtractError::InvalidJson(err)),
        None => Err(ExtractError::Empty),
    }
}

/// Slices of `raw` covering each top-level balanced `{ ... }` group, in order.
///
/// Brace depth is tracked outside string literals only, honouring `\"`
/// escapes. An opening brace with no matching close is skipped.
pub fn object_candidates(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut candidates = Vec::new();
    let mut pos = 0;

    while let Some(offset) = raw[pos..].find('{') {
        let start = pos + offset;
        match matching_close(bytes, start) {
            Some(end) => {
                candidates.push(&raw[start..=end]);
                pos = end + 1;
            }
            None => pos = start + 1,
        }
    }

    candidates
}

/// Index of the `}` closing the group opened at `start`, if any.
fn matching_close(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
