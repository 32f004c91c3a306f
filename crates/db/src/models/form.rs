//! Generated form model and DTOs.

use formgen_core::types::{DbId, OwnerId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `forms` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Form {
    pub id: DbId,
    /// Subject of the identity that generated the form.
    pub owner_id: OwnerId,
    /// Form definition as returned by the model, typically
    /// `{ "title", "fields", "button" }`.
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForm {
    pub owner_id: OwnerId,
    pub content: serde_json::Value,
}
