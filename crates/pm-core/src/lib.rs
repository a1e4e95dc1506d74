//! # pm-core
//!
//! Foundational types shared across the patient-management client crates:
//! - Wire structs for the auth and patient endpoints
//! - The `Role` claim value and its normalization rules
//! - Client-side input validation mirroring the form constraints
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod role;

pub use errors::CoreError;
pub use role::Role;
