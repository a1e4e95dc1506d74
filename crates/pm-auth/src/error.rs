use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in; run `pm auth login` first")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("keyring error: {0}")]
    Keyring(String),
}
