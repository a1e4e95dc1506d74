//! Cross-cutting error types.
//!
//! Transport and storage errors live in their own crates (`pm-client`,
//! `pm-auth`). This module only covers what the shared types can reject.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required field was empty after trimming.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A field was present but did not satisfy its format.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}
