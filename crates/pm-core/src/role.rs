use std::fmt;

use serde::{Deserialize, Serialize};

/// Role claim carried in a session token payload.
///
/// Always stored uppercase. An empty value means the role is unknown, which
/// callers treat as "no elevated privileges". The set of values is open;
/// only [`Role::ADMIN`] unlocks anything client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub const ADMIN: &'static str = "ADMIN";
    pub const USER: &'static str = "USER";

    /// Normalize a raw claim value.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    /// The unknown/absent role.
    #[must_use]
    pub const fn unknown() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }

    /// Label shown to a signed-in user; an unknown role reads as `USER`.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.is_unknown() { Self::USER } else { &self.0 }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
