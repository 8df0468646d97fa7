use crate::errors::CoreError;
use crate::models::portfolio::PortfolioEntry;

use super::kv::KeyValueStore;

/// Saves, loads and deletes the single portfolio entry under a fixed key.
pub struct PortfolioStorage {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl PortfolioStorage {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the saved entry.
    ///
    /// Flow: PortfolioEntry → JSON `{coinId, amount, buyPriceUsd}` → store[key]
    pub fn save(&mut self, entry: &PortfolioEntry) -> Result<(), CoreError> {
        let json = serde_json::to_string(entry).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize portfolio entry: {e}"))
        })?;
        self.store.set(&self.key, &json)
    }

    /// Read the saved entry, if any.
    pub fn load(&self) -> Result<Option<PortfolioEntry>, CoreError> {
        match self.store.get(&self.key)? {
            Some(json) => {
                let entry = serde_json::from_str(&json).map_err(|e| {
                    CoreError::Deserialization(format!(
                        "Failed to deserialize portfolio entry: {e}"
                    ))
                })?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    /// Delete the saved entry; a no-op when nothing is saved.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for PortfolioStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioStorage")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
