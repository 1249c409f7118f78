//! In-process purge store.
//!
//! Keeps cached pages in a `HashMap` behind a tokio `RwLock`. Wildcard
//! deletion holds the write lock while it enumerates and removes, which
//! gives it the same all-or-nothing view the Redis script has.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{pattern_matches, PurgeStore, Result};

/// Thread-safe in-memory store, cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a cached page under `key`, replacing any previous value.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns all keys, sorted.
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl PurgeStore for MemoryStore {
    async fn delete_key(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn delete_matching(&self, pattern: &str) -> Result<u64> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !pattern_matches(pattern, key));
        let removed = (before - entries.len()) as u64;

        tracing::trace!(%pattern, removed, "Deleted keys by pattern");
        Ok(removed)
    }
}
