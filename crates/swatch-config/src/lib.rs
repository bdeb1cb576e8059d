//! swatch site configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the site config (`site`, `theme`, `content`)
//! - Config resolution (CLI → env → working dir → XDG → defaults)
//! - Semantic validation that reports every problem at once
//! - A persistence adapter used by the theme editor
//! - Config snapshots for `swatch check`

pub mod content;
pub mod resolve;
pub mod site;
pub mod snapshot;
pub mod store;
pub mod theme;
pub mod validate;

pub use content::{ContentBlock, Metadata, MetadataValue, Project, ServiceItem};
pub use resolve::{resolve_config, ConfigPath, ConfigSource};
pub use site::{ConfigError, SiteConfig, SiteMeta};
pub use snapshot::{ConfigSnapshot, ThemeSummary};
pub use store::{MemoryStore, ThemeStore, YamlFileStore};
pub use theme::{NeutralTone, ThemeConfig, ThemeMode, DEFAULT_BRAND_PRIMARY};
pub use validate::{
    validate_content, validate_site, validate_theme, Advisory, ValidationError, ValidationReport,
};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
