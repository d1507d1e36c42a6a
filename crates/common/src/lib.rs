//! Shared building blocks for the book market crates: logging setup and
//! small response types used by the HTTP layer.

pub mod types;
pub mod utils;
