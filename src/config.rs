use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Operator-curated portfolio configuration.
///
/// Loaded from a JSON file; every field has a sensible empty default so a
/// missing file means "show everything, feature nothing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Fallback username when none is given on the command line.
    pub username: Option<String>,
    /// Repos shown first, in card order, regardless of recency.
    pub featured: Vec<String>,
    /// Repos hidden from the portfolio entirely.
    pub excluded: Vec<String>,
    /// Live-demo URLs overriding the repo homepage field.
    pub custom_homepages: HashMap<String, String>,
    /// Descriptions used when the GitHub description is empty.
    pub custom_descriptions: HashMap<String, String>,
}

impl PortfolioConfig {
    /// Load a config file. Absent file yields the default config; a file
    /// that exists but does not parse is an operator error and is surfaced.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            PortfolioError::ConfigError(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    pub fn is_featured(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.featured.iter().any(|f| f.to_lowercase() == lower)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.excluded.iter().any(|f| f.to_lowercase() == lower)
    }
}
