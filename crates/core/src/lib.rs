//! Domain layer for the form generation service.
//!
//! Pure logic only: shared types, the domain error, request validation,
//! prompt composition and extraction of the JSON payload from free-form
//! model output. Nothing in this crate performs I/O.

pub mod error;
pub mod extraction;
pub mod generation;
pub mod types;
