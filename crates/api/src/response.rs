//! Shared response envelope types for API handlers.
//!
//! Read endpoints respond with a `{ "data": ... }` envelope. The form
//! generation action has its own result shape, see
//! [`ActionResult`](crate::forms::ActionResult).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
