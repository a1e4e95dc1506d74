//! # pm-client
//!
//! Authenticated JSON requests against the patient-management API.
//!
//! Every call sends `Content-Type: application/json` (caller headers win) and
//! a bearer token when one is given. The URL is the configured API base plus
//! the request path, or the origin plus the path when no base is set. If an
//! absolute http(s) base cannot be reached at all, the same request is
//! retried once against the origin. Failure statuses surface as
//! [`RequestError`] carrying the numeric status; success bodies are decoded
//! only when the response says it is JSON.

pub mod api;
pub mod client;
pub mod error;
pub mod request;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ClientError, RequestError};
pub use request::RequestDescriptor;
