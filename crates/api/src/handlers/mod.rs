//! Request handlers.
//!
//! Handlers delegate to repositories in `formgen_db` or to the
//! [`FormGenerationAction`](crate::forms::FormGenerationAction) and map
//! errors via [`AppError`](crate::error::AppError).

pub mod forms;
