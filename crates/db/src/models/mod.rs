//! Database row structs and their create DTOs.

pub mod form;
