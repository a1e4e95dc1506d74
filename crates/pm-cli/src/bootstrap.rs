use anyhow::Context;
use pm_auth::{FileStore, KeyValueStore, KeyringStore, MemoryStore};
use pm_config::{PmConfig, SessionConfig, TokenBackend};

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<PmConfig> {
    PmConfig::load_with_dotenv().context("failed to load configuration")
}

/// Open the token store selected by `[session] backend`.
///
/// `--ephemeral` always wins and keeps the token in memory.
pub fn open_store(
    session: &SessionConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<Box<dyn KeyValueStore>> {
    let backend = if flags.ephemeral {
        TokenBackend::Memory
    } else {
        session.backend
    };

    let store: Box<dyn KeyValueStore> = match backend {
        TokenBackend::Memory => Box::new(MemoryStore::new()),
        TokenBackend::File => Box::new(file_store(session)?),
        TokenBackend::Keyring => Box::new(KeyringStore::new(
            session.keyring_service.clone(),
            file_store(session)?,
        )),
    };
    tracing::debug!(?backend, "opened session store");
    Ok(store)
}

fn file_store(session: &SessionConfig) -> anyhow::Result<FileStore> {
    let path = session.file_path().context(
        "cannot resolve a data directory for the session file; set PM_SESSION__PATH",
    )?;
    Ok(FileStore::new(path))
}
