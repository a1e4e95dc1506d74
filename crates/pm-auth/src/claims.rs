//! Best-effort decoding of the token payload.
//!
//! Nothing here verifies a signature. Any failure while decoding degrades to
//! "no claims" rather than an error, so a malformed or foreign token simply
//! reads as an unprivileged session.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use pm_core::Role;
use serde_json::Value;

/// Standard alphabet, padding required, stray trailing bits tolerated.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Claims read from an unverified token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// `role` claim, uppercased; unknown if absent or not a string.
    pub role: Role,
    /// `sub` claim (the account email).
    pub subject: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// A token without an `exp` claim never reads as expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// Role claim of `token`, or the unknown role on any failure.
#[must_use]
pub fn extract_role(token: &str) -> Role {
    decode_payload(token)
        .and_then(|payload| role_claim(&payload))
        .unwrap_or_else(Role::unknown)
}

/// All claims the client cares about, or `None` if the payload is unreadable.
#[must_use]
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = decode_payload(token)?;
    Some(TokenClaims {
        role: role_claim(&payload).unwrap_or_else(Role::unknown),
        subject: payload.get("sub").and_then(Value::as_str).map(str::to_string),
        issued_at: timestamp_claim(&payload, "iat"),
        expires_at: timestamp_claim(&payload, "exp"),
    })
}

/// Decode the second `.`-separated segment as base64url JSON.
fn decode_payload(token: &str) -> Option<Value> {
    if token.is_empty() {
        return None;
    }
    let segment = token.split('.').nth(1)?;
    let mut normalized: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let padded_len = normalized.len().div_ceil(4) * 4;
    while normalized.len() < padded_len {
        normalized.push('=');
    }

    let bytes = match PAYLOAD_ENGINE.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::debug!(%error, "token payload is not base64");
            return None;
        }
    };
    // One char per byte, so a stray non-UTF-8 byte cannot hide the role.
    let text: String = bytes.iter().map(|&b| char::from(b)).collect();
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%error, "token payload is not JSON");
            None
        }
    }
}

fn role_claim(payload: &Value) -> Option<Role> {
    payload.get("role").and_then(Value::as_str).map(Role::new)
}

fn timestamp_claim(payload: &Value, name: &str) -> Option<DateTime<Utc>> {
    payload
        .get(name)
        .and_then(Value::as_i64)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
