//! The site configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::content::ContentBlock;
use crate::theme::ThemeConfig;
use crate::validate::{validate_site, ValidationReport};

/// Errors raised while reading or writing the site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Site-wide identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        SiteMeta {
            title: "My Site".to_string(),
            tagline: None,
            base_url: None,
        }
    }
}

/// The whole configuration record.
///
/// Top-level keys this crate does not know about are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteMeta,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentBlock>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl SiteConfig {
    /// Load from a YAML file. Parses only; call [`SiteConfig::validate`]
    /// for semantic checks.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_file_with_source(path).map(|(config, _)| config)
    }

    /// Like [`SiteConfig::from_file`], also returning the raw file text.
    pub fn from_file_with_source(path: &Path) -> Result<(Self, String), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read site config");
        let config = Self::parse_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((config, content))
    }

    /// Parse from a YAML string.
    pub fn parse_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Write to `path`, replacing its content.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, yaml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "wrote site config");
        Ok(())
    }

    pub fn validate(&self) -> ValidationReport {
        validate_site(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NeutralTone;

    const SAMPLE: &str = r#"
site:
  title: Studio Nord
  base_url: https://nord.example
theme:
  brand_primary: oklch(55% 0.2 30)
  neutral: stone
content:
  - kind: hero
    title: Hello
deploy:
  target: s3
  bucket: nord-site
"#;

    #[test]
    fn parses_and_keeps_unknown_keys() {
        let config = SiteConfig::parse_yaml(SAMPLE).unwrap();
        assert_eq!(config.site.title, "Studio Nord");
        assert_eq!(config.theme.neutral, NeutralTone::Stone);
        assert_eq!(config.content.len(), 1);
        assert!(config.extra.contains_key("deploy"));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("bucket: nord-site"));
        assert_eq!(SiteConfig::parse_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::parse_yaml("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.validate().is_valid());
    }

    #[test]
    fn validate_flags_bad_base_url() {
        let mut config = SiteConfig::parse_yaml(SAMPLE).unwrap();
        config.site.base_url = Some("nord.example".into());
        let report = config.validate();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code(), 44);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = SiteConfig::from_file(Path::new("/nonexistent/swatch/config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
