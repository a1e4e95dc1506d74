//! Typed calls for the auth and patient endpoints.

use pm_core::entities::{
    CreateUserRequest, LoginRequest, LoginResponse, Patient, PatientInput, UserResponse,
};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request::RequestDescriptor;

pub const LOGIN_PATH: &str = "/auth/login";
pub const VALIDATE_PATH: &str = "/auth/validate";
pub const ADMIN_USERS_PATH: &str = "/auth/admin/users";
pub const PATIENTS_PATH: &str = "/patients";

fn patient_path(id: &str) -> String {
    format!("{PATIENTS_PATH}/{}", urlencoding::encode(id))
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingToken` if the response has no token, or
    /// any error from [`ApiClient::request`].
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String, ClientError> {
        let descriptor = RequestDescriptor::post(LOGIN_PATH).json(credentials)?;
        let response: Option<LoginResponse> = self.request_as(&descriptor, None).await?;
        response
            .and_then(|r| r.token)
            .filter(|token| !token.is_empty())
            .ok_or(ClientError::MissingToken)
    }

    /// Ask the auth service whether `token` is still accepted.
    ///
    /// # Errors
    ///
    /// Any failure other than a 401 is propagated.
    pub async fn validate_token(&self, token: &str) -> Result<bool, ClientError> {
        match self.request(&RequestDescriptor::get(VALIDATE_PATH), Some(token)).await {
            Ok(_) => Ok(true),
            Err(error) if error.is_unauthorized() => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// Create an account. The server rejects non-admin callers with 403.
    ///
    /// # Errors
    ///
    /// Any error from [`ApiClient::request`].
    pub async fn create_user(
        &self,
        token: &str,
        user: &CreateUserRequest,
    ) -> Result<Option<UserResponse>, ClientError> {
        let descriptor = RequestDescriptor::post(ADMIN_USERS_PATH).json(user)?;
        self.request_as(&descriptor, Some(token)).await
    }

    /// All patients. A body that is not a JSON array reads as an empty list.
    ///
    /// # Errors
    ///
    /// Any error from [`ApiClient::request`], or `Decode` if an array element
    /// is not a patient object.
    pub async fn list_patients(&self, token: &str) -> Result<Vec<Patient>, ClientError> {
        match self
            .request(&RequestDescriptor::get(PATIENTS_PATH), Some(token))
            .await?
        {
            Some(items @ Value::Array(_)) => Ok(serde_json::from_value(items)?),
            _ => Ok(Vec::new()),
        }
    }

    /// # Errors
    ///
    /// Any error from [`ApiClient::request`].
    pub async fn create_patient(
        &self,
        token: &str,
        patient: &PatientInput,
    ) -> Result<Option<Patient>, ClientError> {
        let descriptor = RequestDescriptor::post(PATIENTS_PATH).json(patient)?;
        self.request_as(&descriptor, Some(token)).await
    }

    /// Replace a patient's details. Any registration date is left out.
    ///
    /// # Errors
    ///
    /// Any error from [`ApiClient::request`].
    pub async fn update_patient(
        &self,
        token: &str,
        id: &str,
        patient: &PatientInput,
    ) -> Result<Option<Patient>, ClientError> {
        let body = patient.clone().for_update();
        let descriptor = RequestDescriptor::put(patient_path(id)).json(&body)?;
        self.request_as(&descriptor, Some(token)).await
    }

    /// # Errors
    ///
    /// Any error from [`ApiClient::request`].
    pub async fn delete_patient(&self, token: &str, id: &str) -> Result<(), ClientError> {
        self.request(&RequestDescriptor::delete(patient_path(id)), Some(token))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_path_encodes_id() {
        assert_eq!(patient_path("abc-123"), "/patients/abc-123");
        assert_eq!(patient_path("a/b"), "/patients/a%2Fb");
    }
}
