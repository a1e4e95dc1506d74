use serde::{Deserialize, Serialize};

use super::{require_email, require_password};
use crate::errors::CoreError;
use crate::role::Role;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a login body, trimming the email the way the login form does.
    /// The password is sent verbatim.
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError` if the email is missing or malformed, or the
    /// password is shorter than eight characters.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_email("email", &self.email)?;
        require_password(&self.password)
    }
}

/// Response of `POST /auth/login`. A missing token is a failed login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /auth/admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserRequest {
    #[must_use]
    pub fn new(email: &str, password: &str, role: &str) -> Self {
        let role = if role.trim().is_empty() {
            Role::new(Role::USER)
        } else {
            Role::new(role.trim())
        };
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError` if the email or password fails the form rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_email("email", &self.email)?;
        require_password(&self.password)
    }
}

/// Response of a successful user creation (201).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(default)]
    pub id: String,
    pub email: String,
    pub role: String,
}
