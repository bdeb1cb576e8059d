//! Configuration snapshots.
//!
//! A snapshot records which file a `check` run used and what it contained,
//! so two runs can be compared by hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::resolve::{ConfigPath, ConfigSource};
use crate::theme::ThemeConfig;

/// A frozen snapshot of configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Schema version of the configuration.
    pub schema_version: String,

    /// Path the config was loaded from.
    #[serde(default)]
    pub path: Option<String>,

    /// Source of the configuration.
    pub source: String,

    /// SHA-256 hash of the file content, or of "none" for defaults.
    pub content_hash: String,

    /// Key theme values for quick reference.
    pub summary: ThemeSummary,
}

/// Summary of the theme settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSummary {
    pub brand_primary: String,
    #[serde(default)]
    pub brand_secondary: Option<String>,
    pub neutral: String,
    pub mode: String,
}

impl From<&ThemeConfig> for ThemeSummary {
    fn from(theme: &ThemeConfig) -> Self {
        ThemeSummary {
            brand_primary: theme.brand_primary.to_string(),
            brand_secondary: theme.brand_secondary.map(|c| c.to_string()),
            neutral: theme.neutral.to_string(),
            mode: theme.mode.to_string(),
        }
    }
}

impl ConfigSnapshot {
    /// Create a new snapshot from a loaded configuration file.
    pub fn new(theme: &ThemeConfig, resolved: &ConfigPath, content: &str) -> Self {
        ConfigSnapshot {
            timestamp: Utc::now(),
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            path: resolved.path.as_ref().map(|p| p.display().to_string()),
            source: resolved.source.to_string(),
            content_hash: hash_content(content),
            summary: ThemeSummary::from(theme),
        }
    }

    /// Create a snapshot with only defaults (no config file loaded).
    pub fn defaults_only() -> Self {
        ConfigSnapshot {
            timestamp: Utc::now(),
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            path: None,
            source: ConfigSource::BuiltinDefault.to_string(),
            content_hash: hash_content("none"),
            summary: ThemeSummary::from(&ThemeConfig::default()),
        }
    }

    /// Serialize snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check if this snapshot matches another (same config content).
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        self.content_hash == other.content_hash
    }

    /// Get a short identifier for this snapshot (first 12 chars of hash).
    pub fn short_id(&self) -> &str {
        &self.content_hash[..12.min(self.content_hash.len())]
    }
}

/// Hash content with SHA-256 and return hex string.
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
