//! AI form generation.
//!
//! [`FormGenerationAction`] runs the whole pipeline (identity, validation,
//! text generation, payload extraction, persistence, cache invalidation) and
//! reports the outcome as an [`ActionResult`]. Its collaborators are passed
//! in explicitly so each step can be exercised with test doubles.

pub mod action;
pub mod result;
pub mod store;

pub use action::{FormGenerationAction, GenerateFormError, FORMS_LISTING_PATH};
pub use result::ActionResult;
pub use store::{FormStore, PgFormStore};
