mod auth;
mod patient;

pub use auth::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
pub use patient::{Patient, PatientInput};

use crate::errors::CoreError;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField { field });
    }
    Ok(())
}

pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), CoreError> {
    require(field, value)?;
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid {
        return Err(CoreError::InvalidField {
            field,
            reason: format!("'{value}' is not an email address"),
        });
    }
    Ok(())
}

pub(crate) fn require_password(value: &str) -> Result<(), CoreError> {
    require("password", value)?;
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::InvalidField {
            field: "password",
            reason: format!("must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }
    Ok(())
}
