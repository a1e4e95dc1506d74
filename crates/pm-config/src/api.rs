//! API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

fn default_origin() -> String {
    "http://localhost:4004".to_string()
}

fn default_user_agent() -> String {
    concat!("pm-cli/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API base origin prepended to every request path. Empty means
    /// "same origin", i.e. requests go straight to [`ApiConfig::origin`].
    #[serde(default)]
    pub base: String,

    /// Origin that relative paths resolve against, and the target of the
    /// same-origin fallback.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Transport timeout per request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            origin: default_origin(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Configured base, whitespace-trimmed with trailing slashes removed.
    #[must_use]
    pub fn normalized_base(&self) -> String {
        normalize_origin(&self.base)
    }

    #[must_use]
    pub fn normalized_origin(&self) -> String {
        normalize_origin(&self.origin)
    }

    /// Check the origin is something a relative path can resolve against.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the origin is empty or not an
    /// absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.normalized_origin();
        if !is_absolute_http(&origin) {
            return Err(ConfigError::InvalidValue {
                field: "api.origin".into(),
                reason: format!("'{origin}' is not an absolute http(s) URL"),
            });
        }
        Ok(())
    }
}

/// Trim whitespace and strip every trailing `/`.
#[must_use]
pub fn normalize_origin(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Case-insensitive `http://` / `https://` prefix check.
#[must_use]
pub fn is_absolute_http(url: &str) -> bool {
    let lower = url
        .get(..8)
        .unwrap_or(url)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
