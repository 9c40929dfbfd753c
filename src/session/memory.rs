use super::{SessionStore, SessionStoreError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Session Store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, SessionStoreError> {
        self.entries
            .lock()
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
