pub mod forms;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forms                 list caller's forms (auth required)
/// /forms/generate        generate and store a form (POST)
/// /forms/{id}            get one of caller's forms (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/forms", forms::router())
}
