use crate::error::AuthError;
use crate::file_store::FileStore;
use crate::store::KeyValueStore;

/// OS keychain storage, one credential per key under a service name.
///
/// Falls back to a [`FileStore`] when the keychain is unavailable; reads
/// check the keychain first, then the file.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
    fallback: FileStore,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>, fallback: FileStore) -> Self {
        Self {
            service: service.into(),
            fallback,
        }
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, key).map_err(|e| AuthError::Keyring(e.to_string()))
    }
}

impl KeyValueStore for KeyringStore {
    fn get(&self, key: &str) -> Option<String> {
        if let Ok(entry) = self.entry(key)
            && let Ok(value) = entry.get_password()
            && !value.is_empty()
        {
            return Some(value);
        }
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        match self.entry(key) {
            Ok(entry) => match entry.set_password(value) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.fallback.set(key, value)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.fallback.set(key, value)
            }
        }
    }

    fn delete(&self, key: &str) -> Result<(), AuthError> {
        // Either location may hold the value; clear both.
        if let Ok(entry) = self.entry(key) {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(error) => tracing::warn!(%error, "keyring delete failed"),
            }
        }
        self.fallback.delete(key)
    }
}
