//! Repository for the `forms` table.

use formgen_core::types::DbId;
use sqlx::PgPool;

use crate::models::form::{CreateForm, Form};

/// Column list for `forms` queries.
const COLUMNS: &str = "id, owner_id, content, created_at, updated_at";

/// Provides data access for generated forms.
pub struct FormRepo;

impl FormRepo {
    /// Insert a new form, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateForm) -> Result<Form, sqlx::Error> {
        let query = format!(
            "INSERT INTO forms (owner_id, content) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(&input.owner_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a form by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all forms owned by `owner_id`, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM forms \
             WHERE owner_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }
}
