//! Persistent result cache keyed by username.
//!
//! The whole cache is one JSON document:
//!
//! ```json
//! { "profiles": { "alice": [ { "platform": "GitHub", "url": "...", "status": "Found" } ] } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::ProfileResult;
use crate::storage::BlobStore;

/// In-memory view of the result cache.
///
/// Usernames are case-sensitive and used verbatim. Entries never expire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCache {
    #[serde(default)]
    profiles: BTreeMap<String, Vec<ProfileResult>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from storage.
    ///
    /// A missing, unreadable or corrupt blob yields an empty cache.
    pub async fn load(store: &dyn BlobStore, key: &str) -> Self {
        let bytes = match store.read_bytes_optional(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                log::debug!("No cache at {key}, starting empty");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read cache {key}: {e}. Starting empty.");
                return Self::default();
            }
        };

        match serde_json::from_slice::<Self>(&bytes) {
            Ok(cache) => {
                log::debug!("Loaded {} cached usernames from {key}", cache.len());
                cache
            }
            Err(e) => {
                log::warn!("Cache {key} is corrupt: {e}. Starting empty.");
                Self::default()
            }
        }
    }

    /// Overwrite storage with the full cache.
    pub async fn save(&self, store: &dyn BlobStore, key: &str) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        store.write_bytes(key, &bytes).await?;
        log::debug!("Saved {} cached usernames to {key}", self.len());
        Ok(())
    }

    /// Cached results for a username, in catalog order.
    pub fn get(&self, username: &str) -> Option<&[ProfileResult]> {
        self.profiles.get(username).map(Vec::as_slice)
    }

    /// Insert or overwrite the results for a username.
    pub fn put(&mut self, username: impl Into<String>, results: Vec<ProfileResult>) {
        self.profiles.insert(username.into(), results);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.profiles.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Cached usernames in sorted order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
