//! Handlers for generated forms.
//!
//! Provides the generation endpoint and the owner-scoped read endpoints.

use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Form as FormBody, Json};
use formgen_core::error::CoreError;
use formgen_core::generation::GenerationRequest;
use formgen_core::types::DbId;
use formgen_db::repositories::FormRepo;

use crate::error::{form_rejection_errors, AppError, AppResult};
use crate::forms::{ActionResult, FormGenerationAction, PgFormStore, FORMS_LISTING_PATH};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /forms/generate
// ---------------------------------------------------------------------------

/// Generate a form from an urlencoded `description` and store it for the caller.
///
/// Always answers with the action result shape, including for anonymous
/// callers and bodies that are not urlencoded.
pub async fn generate_form(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    body: Result<FormBody<GenerationRequest>, FormRejection>,
) -> ActionResult {
    let request = match body {
        Ok(FormBody(request)) => request,
        Err(rejection) => {
            return FormGenerationAction::reject_submission(
                user.as_ref(),
                form_rejection_errors(&rejection),
            );
        }
    };

    let action = FormGenerationAction::new(
        Arc::clone(&state.generator),
        Arc::new(PgFormStore::new(state.pool.clone())),
        Arc::clone(&state.view_cache),
    );

    action.run(user.as_ref(), &request).await
}

// ---------------------------------------------------------------------------
// GET /forms
// ---------------------------------------------------------------------------

/// List the caller's forms, newest first.
///
/// Served from the view cache when fresh; the generation action invalidates
/// it after every new form.
pub async fn list_forms(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    if let Some(cached) = state
        .view_cache
        .get(FORMS_LISTING_PATH, &user.user_id)
        .await
    {
        tracing::debug!(owner_id = %user.user_id, "Forms listing served from cache");
        return Ok(Json(DataResponse { data: cached }));
    }

    let epoch = state.view_cache.epoch();
    let forms = FormRepo::list_by_owner(&state.pool, &user.user_id).await?;
    let data = serde_json::to_value(&forms)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize forms: {e}")))?;

    state
        .view_cache
        .insert(FORMS_LISTING_PATH, &user.user_id, data.clone(), epoch)
        .await;

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// GET /forms/{id}
// ---------------------------------------------------------------------------

/// Fetch one of the caller's forms.
///
/// Forms owned by someone else are reported as not found.
pub async fn get_form(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let form = FormRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|f| f.owner_id == user.user_id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;

    Ok(Json(DataResponse { data: form }))
}
