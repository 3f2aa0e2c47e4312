// In-memory key-value store using DashMap
use crate::domain::error::TransproError;
use crate::domain::traits::KeyValueStore;
use async_trait::async_trait;
use dashmap::DashMap;

/// Thread-safe in-memory store
///
/// Nothing survives the process. Used by `--ephemeral` sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (k, v) in entries {
            store.map.insert(k.into(), v.into());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TransproError> {
        Ok(self.map.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), TransproError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
