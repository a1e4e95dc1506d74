//! # pm-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PM_*` prefix, `__` as separator)
//! 2. Project-level `.pm/config.toml`
//! 3. User-level `~/.config/pm/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `PM_API__BASE` -> `api.base`, `PM_SESSION__BACKEND` -> `session.backend`.
//!
//! # Usage
//!
//! ```no_run
//! use pm_config::PmConfig;
//!
//! let config = PmConfig::load_with_dotenv().expect("config");
//! println!("API base: {:?}", config.api.normalized_base());
//! ```

mod api;
mod error;
mod session;

pub use api::{ApiConfig, is_absolute_http, normalize_origin};
pub use error::ConfigError;
pub use session::{DEFAULT_TOKEN_KEY, SessionConfig, TokenBackend};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PmConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl PmConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`PmConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`PmConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".pm/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PM_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pm").join("config.toml"))
    }
}
