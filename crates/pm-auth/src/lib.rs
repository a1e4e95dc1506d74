//! # pm-auth
//!
//! Session handling for the patient-management client.
//!
//! Persists the bearer token behind a [`KeyValueStore`] seam (memory, JSON
//! file, or OS keychain) and reads the `role` claim out of the token payload
//! for client-side gating. The token signature is never checked here: the
//! role only decides what the client offers, the server still authorizes.

pub mod claims;
pub mod error;
pub mod file_store;
pub mod keyring_store;
pub mod session;
pub mod store;

pub use claims::{TokenClaims, decode_claims, extract_role};
pub use error::AuthError;
pub use file_store::FileStore;
pub use keyring_store::KeyringStore;
pub use session::SessionManager;
pub use store::{KeyValueStore, MemoryStore};
