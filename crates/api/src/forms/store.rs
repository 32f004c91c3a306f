//! Persistence seam for the form generation action.

use async_trait::async_trait;
use formgen_db::models::form::{CreateForm, Form};
use formgen_db::repositories::FormRepo;
use sqlx::PgPool;

/// Write side of form storage used by [`FormGenerationAction`](super::FormGenerationAction).
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Insert a new form and return the stored row.
    async fn create_form(&self, input: &CreateForm) -> Result<Form, sqlx::Error>;
}

/// [`FormStore`] backed by PostgreSQL through [`FormRepo`].
pub struct PgFormStore {
    pool: PgPool,
}

impl PgFormStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FormStore for PgFormStore {
    async fn create_form(&self, input: &CreateForm) -> Result<Form, sqlx::Error> {
        FormRepo::create(&self.pool, input).await
    }
}
