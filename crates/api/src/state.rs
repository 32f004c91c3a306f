use std::sync::Arc;

use formgen_genai::TextGenerator;

use crate::cache::ViewCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formgen_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Text generation provider used by the form generation action.
    pub generator: Arc<dyn TextGenerator>,
    /// Cached listing views, invalidated after writes.
    pub view_cache: Arc<ViewCache>,
}
