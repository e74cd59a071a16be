use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub API response structure for a repository listing entry.
// Deserialized wholesale on each fetch and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u32,
    /// Null for repositories that have never received a push.
    pub pushed_at: Option<DateTime<Utc>>,
    pub homepage: Option<String>,
    pub html_url: String,
    pub fork: bool,
}

impl GitHubRepo {
    /// Sort key for recency ordering; never-pushed repos sort last.
    pub fn pushed_at_or_epoch(&self) -> DateTime<Utc> {
        self.pushed_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// A repository that survived ranking, tagged with its featured status.
/// Recomputed on every invocation, never persisted.
#[derive(Debug, Clone)]
pub struct RankedRepo {
    pub repo: GitHubRepo,
    pub featured: bool,
}
