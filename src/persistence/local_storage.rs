//! Browser LocalStorage high score store

use super::{HighScoreStore, StoreError};

/// Persists the high score as a JSON number under a LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::STORAGE_KEY)
    }
}

impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "dino_hi";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not accessible".into()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn read(&self) -> Result<Option<u32>, StoreError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str::<u32>(json.trim())?)),
            None => Ok(None),
        }
    }

    fn write(&mut self, high_score: u32) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(&high_score)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
    }
}
