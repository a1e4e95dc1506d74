//! Client error types

use std::fmt;

use thiserror::Error;

/// A response arrived but its status was outside 200–299.
///
/// `message` is the response body verbatim, or `Request failed (<status>)`
/// when the body was empty. Callers branch on `status` (401 means the session
/// is gone) and otherwise show `message` as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub message: String,
    pub status: u16,
}

impl RequestError {
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("Request failed ({status})")
        } else {
            body
        };
        Self { message, status }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure status.
    #[error(transparent)]
    Status(#[from] RequestError),

    /// A JSON success body could not be parsed or did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A caller-supplied header or body could not be used.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Login succeeded at the HTTP level but carried no token.
    #[error("No token returned from /auth/login")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of a failed response, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(err) => Some(err.status),
            _ => None,
        }
    }

    /// True when the server rejected the bearer token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}
