use std::sync::{Arc, Mutex};

use nexora_logging::nexora_error;

use crate::persist::KvStore;

pub const TOKEN_STORAGE_KEY: &str = "auth-token";

/// Holder of the bearer token attached to outgoing requests.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Token persisted in a key-value store so it survives restarts.
pub struct PersistedTokenStore {
    store: Arc<dyn KvStore>,
}

impl PersistedTokenStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }
}

impl TokenStore for PersistedTokenStore {
    fn get(&self) -> Option<String> {
        match self.store.get(TOKEN_STORAGE_KEY) {
            Ok(token) => token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            Err(err) => {
                nexora_error!("Failed to read auth token: {}", err);
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(err) = self.store.set(TOKEN_STORAGE_KEY, token) {
            nexora_error!("Failed to store auth token: {}", err);
        }
    }

    fn clear(&self) {
        if let Err(err) = self.store.remove(TOKEN_STORAGE_KEY) {
            nexora_error!("Failed to remove auth token: {}", err);
        }
    }
}
