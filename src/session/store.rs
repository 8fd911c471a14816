// src/session/store.rs
use crate::errors::ServerError;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

/// Persistence adapter for per-visitor state.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
    fn remove(&self, key: &str) -> Result<(), ServerError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        (**self).remove(key)
    }
}

/// Process-local store for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        let map = self.entries.lock().map_err(|_| ServerError::InternalError)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let mut map = self.entries.lock().map_err(|_| ServerError::InternalError)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        let mut map = self.entries.lock().map_err(|_| ServerError::InternalError)?;
        map.remove(key);
        Ok(())
    }
}
