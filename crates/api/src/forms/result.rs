//! The uniform result shape returned by the form generation action.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use formgen_core::generation::FieldError;
use formgen_db::models::form::Form;
use serde::Serialize;

use super::action::GenerateFormError;

pub const MSG_SUCCESS: &str = "Form generated successfully";
pub const MSG_UNAUTHENTICATED: &str = "User not found";
pub const MSG_INVALID_INPUT: &str = "Invalid form data";
pub const MSG_NOT_CONFIGURED: &str = "AI provider API key not found";
pub const MSG_EMPTY_GENERATION: &str = "Failed to generate form content";
pub const MSG_INVALID_JSON: &str = "Generated form content is not valid JSON";
pub const MSG_INTERNAL: &str = "An error occurred while generating the form";

/// `{ success, message, data?, error? }`
///
/// `data` is set only on success, `error` only for validation failures.
/// The HTTP status is carried alongside but not serialized.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Form>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<FieldError>>,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ActionResult {
    pub fn success(form: Form) -> Self {
        Self {
            success: true,
            message: MSG_SUCCESS.to_string(),
            data: Some(form),
            error: None,
            status: StatusCode::CREATED,
        }
    }

    fn failure(status: StatusCode, message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            error: None,
            status,
        }
    }
}

impl From<GenerateFormError> for ActionResult {
    /// Internal failures map to one generic message; their detail stays in
    /// the server log.
    fn from(err: GenerateFormError) -> Self {
        match err {
            GenerateFormError::Unauthenticated => {
                Self::failure(StatusCode::UNAUTHORIZED, MSG_UNAUTHENTICATED)
            }
            GenerateFormError::Validation(fields) => Self {
                error: Some(fields),
                ..Self::failure(StatusCode::UNPROCESSABLE_ENTITY, MSG_INVALID_INPUT)
            },
            GenerateFormError::Configuration => {
                Self::failure(StatusCode::SERVICE_UNAVAILABLE, MSG_NOT_CONFIGURED)
            }
            GenerateFormError::EmptyGeneration => {
                Self::failure(StatusCode::BAD_GATEWAY, MSG_EMPTY_GENERATION)
            }
            GenerateFormError::InvalidGeneratedJson(_) => {
                Self::failure(StatusCode::BAD_GATEWAY, MSG_INVALID_JSON)
            }
            GenerateFormError::Provider(_) | GenerateFormError::Store(_) => {
                Self::failure(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
        }
    }
}

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use formgen_genai::GenAiError;

    use super::*;

    fn to_json(result: &ActionResult) -> serde_json::Value {
        serde_json::to_value(result).unwrap()
    }

    #[test]
    fn validation_failure_carries_field_errors() {
        let result = ActionResult::from(GenerateFormError::Validation(vec![FieldError {
            field: "description".into(),
            code: "length".into(),
            message: "Description is required".into(),
        }]));

        assert_eq!(result.status, StatusCode::UNPROCESSABLE_ENTITY);
        let json = to_json(&result);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], MSG_INVALID_INPUT);
        assert_eq!(json["error"][0]["field"], "description");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn internal_failures_hide_detail() {
        let result = ActionResult::from(GenerateFormError::Provider(GenAiError::ApiError {
            status: 500,
            body: "upstream stack trace".into(),
        }));

        assert_eq!(result.status, StatusCode::INTERNAL_SERVER_ERROR);
        let json = to_json(&result);
        assert_eq!(json["message"], MSG_INTERNAL);
        assert!(!json.to_string().contains("stack trace"));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn status_codes_per_failure() {
        let cases = [
            (GenerateFormError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (GenerateFormError::Configuration, StatusCode::SERVICE_UNAVAILABLE),
            (GenerateFormError::EmptyGeneration, StatusCode::BAD_GATEWAY),
            (
                GenerateFormError::Store(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let result = ActionResult::from(err);
            assert_eq!(result.status, status);
            assert!(!result.success);
        }
    }
}
