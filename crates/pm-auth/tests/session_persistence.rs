//! Session tokens persisted through the file store survive a fresh manager.

use pm_auth::{FileStore, KeyValueStore, MemoryStore, SessionManager};
use pretty_assertions::assert_eq;

const KEY: &str = "pm_react_token";
const ADMIN_TOKEN: &str = "header.eyJyb2xlIjoiYWRtaW4ifQ.sig";

#[test]
fn token_survives_reopen() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");

    SessionManager::new(FileStore::new(&path), KEY)
        .save_token(ADMIN_TOKEN)
        .expect("save");

    let reopened = SessionManager::new(FileStore::new(&path), KEY);
    assert_eq!(reopened.saved_token(), ADMIN_TOKEN);
    assert_eq!(reopened.role().as_str(), "ADMIN");
}

#[test]
fn logout_is_visible_to_other_handles() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");

    let first = SessionManager::new(FileStore::new(&path), KEY);
    let second = SessionManager::new(FileStore::new(&path), KEY);

    first.save_token("abc").expect("save");
    assert_eq!(second.saved_token(), "abc");

    second.save_token("").expect("clear");
    assert_eq!(first.saved_token(), "");
}

#[test]
fn boxed_store_works_behind_manager() {
    let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let session = SessionManager::new(store, KEY);
    session.save_token("abc").expect("save");
    assert_eq!(session.saved_token(), "abc");
}

#[test]
fn claims_expose_subject() {
    // {"sub":"admin@test.com","role":"admin"}
    let token = "h.eyJzdWIiOiJhZG1pbkB0ZXN0LmNvbSIsInJvbGUiOiJhZG1pbiJ9.s";
    let session = SessionManager::new(MemoryStore::new(), KEY);
    session.save_token(token).expect("save");

    let claims = session.claims().expect("claims");
    assert_eq!(claims.subject.as_deref(), Some("admin@test.com"));
    assert!(claims.role.is_admin());
}
