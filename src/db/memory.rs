use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::errors::AppError;

/// Volatile store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let values = self
            .values
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
