//! Persistence for the site configuration.
//!
//! Saving is a plain read-modify-write of the whole file: no locking and
//! no temp-file rename.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::site::{ConfigError, SiteConfig};

/// Load and save a [`SiteConfig`].
pub trait ThemeStore {
    fn load(&self) -> Result<SiteConfig, ConfigError>;
    fn save(&mut self, config: &SiteConfig) -> Result<(), ConfigError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// A YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        YamlFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for YamlFileStore {
    fn load(&self) -> Result<SiteConfig, ConfigError> {
        SiteConfig::from_file(&self.path)
    }

    fn save(&mut self, config: &SiteConfig) -> Result<(), ConfigError> {
        config.write_to(&self.path)?;
        info!(path = %self.path.display(), "saved site config");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<SiteConfig>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SiteConfig) -> Self {
        MemoryStore {
            slot: Arc::new(Mutex::new(Some(config))),
            saves: Arc::default(),
        }
    }

    /// The stored config, if any has been set or saved.
    pub fn current(&self) -> Option<SiteConfig> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }
}

impl ThemeStore for MemoryStore {
    /// An empty store loads the default config.
    fn load(&self) -> Result<SiteConfig, ConfigError> {
        Ok(self.current().unwrap_or_default())
    }

    fn save(&mut self, config: &SiteConfig) -> Result<(), ConfigError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(config.clone());
        }
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
