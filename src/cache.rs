use crate::error::Result;
use crate::github::RepoSource;
use crate::storage::JsonStore;
use crate::types::GitHubRepo;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How long a cached repository listing stays valid.
pub const CACHE_TTL_MINUTES: i64 = 10;

/// A cached repository listing, keyed in the store by username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub saved_at: DateTime<Utc>,
    pub data: Vec<GitHubRepo>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.saved_at < Duration::minutes(CACHE_TTL_MINUTES)
    }
}

pub fn cache_key(username: &str) -> String {
    format!("gh_repos_{}", username)
}

/// Where the returned listing came from, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Cache,
    Remote,
}

/// Return the user's repositories, from cache when a fresh entry exists and
/// `force` is not set, otherwise from the remote source. A successful remote
/// fetch overwrites the cache entry; a corrupt entry reads as absent.
pub async fn fetch_repos(
    source: &dyn RepoSource,
    store: &JsonStore,
    username: &str,
    force: bool,
) -> Result<(Vec<GitHubRepo>, FetchOrigin)> {
    let key = cache_key(username);

    if !force {
        if let Some(entry) = store.get::<CacheEntry>(&key) {
            if entry.is_fresh(Utc::now()) {
                debug!(username, saved_at = %entry.saved_at, "serving repos from cache");
                return Ok((entry.data, FetchOrigin::Cache));
            }
            debug!(username, saved_at = %entry.saved_at, "cache entry expired");
        }
    }

    info!(username, "fetching repos from GitHub");
    let data = source.list_repos(username).await?;

    let entry = CacheEntry {
        saved_at: Utc::now(),
        data: data.clone(),
    };
    store.put(&key, &entry)?;

    Ok((data, FetchOrigin::Remote))
}
