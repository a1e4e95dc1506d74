//! Typed endpoint calls against a mock auth/patient service.

use pm_client::{ApiClient, ClientError};
use pm_core::entities::{CreateUserRequest, LoginRequest, PatientInput};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let api = ApiClient::builder()
        .origin(server.uri())
        .build()
        .expect("client builds");
    (server, api)
}

#[tokio::test]
async fn login_returns_token() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "testuser@test.com", "password": "password123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-token"})))
        .mount(&server)
        .await;

    let token = api
        .login(&LoginRequest::new(" testuser@test.com ", "password123"))
        .await
        .expect("login");
    assert_eq!(token, "jwt-token");
}

#[tokio::test]
async fn login_without_token_fails() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = api
        .login(&LoginRequest::new("a@b.com", "password123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingToken));
    assert_eq!(err.to_string(), "No token returned from /auth/login");
}

#[tokio::test]
async fn login_rejected_carries_status() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = api
        .login(&LoginRequest::new("a@b.com", "wrongpassword"))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn validate_token_maps_401_to_false() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/auth/validate"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/validate"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(api.validate_token("good").await.expect("validate"));
    assert!(!api.validate_token("stale").await.expect("validate"));
}

#[tokio::test]
async fn list_patients_parses_records() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "Jane", "email": "jane@example.com", "address": "1 Main St", "dateOfBirth": "1990-04-12"}
        ])))
        .mount(&server)
        .await;

    let patients = api.list_patients("abc").await.expect("list");
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].name, "Jane");
    assert_eq!(patients[0].date_of_birth, "1990-04-12");
}

#[tokio::test]
async fn list_patients_non_array_is_empty() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    assert!(api.list_patients("abc").await.expect("list").is_empty());
}

#[tokio::test]
async fn update_patient_omits_registered_date() {
    let (server, api) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/patients/p1"))
        .and(body_json(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "address": "2 Side St",
            "dateOfBirth": "1990-04-12"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1", "name": "Jane"})))
        .expect(1)
        .mount(&server)
        .await;

    let input = PatientInput::new("Jane", "jane@example.com", "2 Side St", "1990-04-12")
        .with_registered_date("2024-01-01");
    let updated = api
        .update_patient("abc", "p1", &input)
        .await
        .expect("update")
        .expect("body");
    assert_eq!(updated.id, "p1");
}

#[tokio::test]
async fn create_patient_sends_registered_date() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/patients"))
        .and(body_json(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "address": "1 Main St",
            "dateOfBirth": "1990-04-12",
            "registeredDate": "2024-01-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p9"})))
        .expect(1)
        .mount(&server)
        .await;

    let input = PatientInput::new("Jane", "jane@example.com", "1 Main St", "1990-04-12")
        .with_registered_date("2024-01-01");
    let created = api.create_patient("abc", &input).await.expect("create");
    assert_eq!(created.map(|p| p.id), Some("p9".to_string()));
}

#[tokio::test]
async fn delete_patient_accepts_no_content() {
    let (server, api) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/patients/p1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    api.delete_patient("abc", "p1").await.expect("delete");
}

#[tokio::test]
async fn create_user_forbidden_for_non_admin() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/admin/users"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = api
        .create_user("user-token", &CreateUserRequest::new("new@test.com", "password123", "USER"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Request failed (403)");
}

#[tokio::test]
async fn create_user_returns_created_account() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/auth/admin/users"))
        .and(body_json(json!({"email": "new@test.com", "password": "password123", "role": "ADMIN"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "0b7c7c1e-2a6f-4a55-9a55-2f1a0f6f3c11",
            "email": "new@test.com",
            "role": "ADMIN"
        })))
        .mount(&server)
        .await;

    let user = api
        .create_user("admin-token", &CreateUserRequest::new("new@test.com", "password123", "admin"))
        .await
        .expect("create")
        .expect("body");
    assert_eq!(user.email, "new@test.com");
    assert_eq!(user.role, "ADMIN");
}
