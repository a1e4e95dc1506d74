use pm_auth::{KeyValueStore, SessionManager};
use pm_client::{ApiClient, ClientError};
use pm_config::PmConfig;

pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// Everything a command needs: the API client and the persisted session.
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionManager<Box<dyn KeyValueStore>>,
}

impl AppContext {
    pub fn init(config: &PmConfig, store: Box<dyn KeyValueStore>) -> anyhow::Result<Self> {
        let api = ApiClient::from_config(&config.api)?;
        if api.base().is_empty() {
            tracing::debug!(origin = api.origin(), "no API base configured; using origin");
        }
        Ok(Self {
            api,
            session: SessionManager::new(store, config.session.key.clone()),
        })
    }

    /// Stored token, or a "Login first" error.
    pub fn require_token(&self) -> anyhow::Result<String> {
        self.session
            .require_token()
            .map_err(|_| anyhow::anyhow!("Login first"))
    }

    /// Turn a failed authenticated call into the message shown to the user.
    ///
    /// A 401 ends the session: the stored token is cleared and the user is
    /// told to log in again. Anything else is reported as
    /// `<action> failed: <message>`.
    pub fn failure(&self, action: &str, error: ClientError) -> anyhow::Error {
        if error.is_unauthorized() {
            if let Err(clear_error) = self.session.clear() {
                tracing::warn!(%clear_error, "failed to clear expired session");
            }
            return anyhow::anyhow!(SESSION_EXPIRED);
        }
        anyhow::anyhow!("{action} failed: {error}")
    }
}
