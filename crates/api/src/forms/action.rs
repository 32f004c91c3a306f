//! The form generation pipeline.
//!
//! Steps, each returning early on failure:
//! 1. Resolve the caller's identity.
//! 2. Validate the description.
//! 3. Check that the text generation provider is configured.
//! 4. Send the composed prompt to the provider (single call, no retry).
//! 5. Extract the JSON object from the raw output.
//! 6. Persist the form for the caller.
//! 7. Invalidate the forms listing view.
//!
//! Nothing is written unless every step before persistence succeeds.

use std::sync::Arc;

use formgen_core::extraction::{extract_form_payload, ExtractError};
use formgen_core::generation::{
    compose_prompt, form_title, validate_request, FieldError, GenerationRequest,
};
use formgen_db::models::form::{CreateForm, Form};
use formgen_genai::{GenAiError, TextGenerator};

use super::result::ActionResult;
use super::store::FormStore;
use crate::cache::ViewCache;
use crate::middleware::auth::AuthUser;

/// Listing view made stale by every new form.
pub const FORMS_LISTING_PATH: &str = "/dashboard/forms";

/// Terminal failure of one pipeline step.
#[derive(Debug, thiserror::Error)]
pub enum GenerateFormError {
    #[error("no authenticated user")]
    Unauthenticated,

    #[error("invalid form data")]
    Validation(Vec<FieldError>),

    #[error("text generation provider is not configured")]
    Configuration,

    #[error("model output contains no JSON object")]
    EmptyGeneration,

    #[error("model output is not valid JSON: {0}")]
    InvalidGeneratedJson(#[source] serde_json::Error),

    #[error("text generation failed: {0}")]
    Provider(#[source] GenAiError),

    #[error("failed to store form: {0}")]
    Store(#[from] sqlx::Error),
}

impl From<GenAiError> for GenerateFormError {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::NotConfigured => Self::Configuration,
            GenAiError::EmptyResponse => Self::EmptyGeneration,
            other => Self::Provider(other),
        }
    }
}

impl From<ExtractError> for GenerateFormError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Empty => Self::EmptyGeneration,
            ExtractError::InvalidJson(err) => Self::InvalidGeneratedJson(err),
        }
    }
}

/// Generates a form definition from a description and stores it for the caller.
pub struct FormGenerationAction {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn FormStore>,
    view_cache: Arc<ViewCache>,
}

impl FormGenerationAction {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn FormStore>,
        view_cache: Arc<ViewCache>,
    ) -> Self {
        Self {
            generator,
            store,
            view_cache,
        }
    }

    /// Run the pipeline and fold the outcome into an [`ActionResult`].
    pub async fn run(&self, user: Option<&AuthUser>, request: &GenerationRequest) -> ActionResult {
        match self.generate(user, request).await {
            Ok(form) => ActionResult::success(form),
            Err(err) => {
                log_failure(&err);
                ActionResult::from(err)
            }
        }
    }

    /// Fold a submission whose body could not be decoded into an
    /// [`ActionResult`].
    ///
    /// Identity is still checked first, so anonymous callers get the same
    /// outcome whatever they send.
    pub fn reject_submission(user: Option<&AuthUser>, fields: Vec<FieldError>) -> ActionResult {
        let err = match user {
            Some(_) => GenerateFormError::Validation(fields),
            None => GenerateFormError::Unauthenticated,
        };
        log_failure(&err);
        ActionResult::from(err)
    }

    /// Run the pipeline, returning the stored form or the failing step.
    pub async fn generate(
        &self,
        user: Option<&AuthUser>,
        request: &GenerationRequest,
    ) -> Result<Form, GenerateFormError> {
        let user = user.ok_or(GenerateFormError::Unauthenticated)?;

        validate_request(request).map_err(GenerateFormError::Validation)?;

        if !self.generator.is_configured() {
            return Err(GenerateFormError::Configuration);
        }

        let prompt = compose_prompt(&request.description);
        let raw = self.generator.generate_text(&prompt).await?;
        let content = extract_form_payload(&raw)?;

        let form = self
            .store
            .create_form(&CreateForm {
                owner_id: user.user_id.clone(),
                content,
            })
            .await?;

        self.view_cache.invalidate(FORMS_LISTING_PATH).await;

        tracing::info!(
            form_id = form.id,
            owner_id = %form.owner_id,
            title = form_title(&form.content).unwrap_or("<untitled>"),
            "Form generated"
        );

        Ok(form)
    }
}

fn log_failure(err: &GenerateFormError) {
    match err {
        GenerateFormError::Unauthenticated | GenerateFormError::Validation(_) => {
            tracing::debug!(error = %err, "Form generation rejected");
        }
        GenerateFormError::Configuration => {
            tracing::warn!("Form generation requested but no provider API key is configured");
        }
        GenerateFormError::EmptyGeneration | GenerateFormError::InvalidGeneratedJson(_) => {
            tracing::warn!(error = %err, "Unusable model output");
        }
        GenerateFormError::Provider(_) | GenerateFormError::Store(_) => {
            tracing::error!(error = %err, "Error generating form");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
