use crate::error::Result;
use crate::storage::JsonStore;
use std::collections::HashMap;

const LIKES_KEY: &str = "projectLikes";

/// Client-local like counters, one per repository name. Persisted
/// indefinitely; a corrupt store reads as empty.
pub struct LikeStore<'a> {
    store: &'a JsonStore,
}

impl<'a> LikeStore<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        LikeStore { store }
    }

    fn read_map(&self) -> HashMap<String, u64> {
        self.store.get(LIKES_KEY).unwrap_or_default()
    }

    pub fn get(&self, repo_name: &str) -> u64 {
        self.read_map().get(repo_name).copied().unwrap_or(0)
    }

    /// Increment by one and persist the whole map. Last write wins.
    pub fn increment(&self, repo_name: &str) -> Result<u64> {
        let mut map = self.read_map();
        let count = map.entry(repo_name.to_string()).or_insert(0);
        *count += 1;
        let count = *count;
        self.store.put(LIKES_KEY, &map)?;
        Ok(count)
    }
}
