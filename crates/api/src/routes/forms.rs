//! Route definitions for generated forms.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Form routes mounted at `/forms`.
///
/// ```text
/// GET  /          -> list_forms
/// POST /generate  -> generate_form
/// GET  /{id}      -> get_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list_forms))
        .route("/generate", post(forms::generate_form))
        .route("/{id}", get(forms::get_form))
}
