//! Session token persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage key of the persisted token.
pub const DEFAULT_TOKEN_KEY: &str = "pm_react_token";

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_keyring_service() -> String {
    "pm-cli".to_string()
}

/// Where the session token is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    /// JSON file under the user data directory.
    #[default]
    File,
    /// OS keychain, falling back to the file store if unavailable.
    Keyring,
    /// Process memory only; nothing survives exit.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: TokenBackend,

    /// Key the token is stored under.
    #[serde(default = "default_token_key")]
    pub key: String,

    /// Override for the session file location.
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: TokenBackend::default(),
            key: default_token_key(),
            path: None,
            keyring_service: default_keyring_service(),
        }
    }
}

impl SessionConfig {
    /// Resolved session file path: the override, else `<data_dir>/pm/session.json`.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("pm").join("session.json")))
    }
}
