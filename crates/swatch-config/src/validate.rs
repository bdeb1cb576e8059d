//! Configuration validation errors and semantic validation.
//!
//! Validation never stops at the first problem: every check runs and the
//! results are collected into a [`ValidationReport`].

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use swatch_color::{ColorIssue, OklchColor};
use thiserror::Error;

use crate::content::ContentBlock;
use crate::site::SiteConfig;
use crate::theme::ThemeConfig;

/// Maximum number of metadata entries per content block.
pub const MAX_METADATA_KEYS: usize = 32;

/// Maximum length of a metadata key.
pub const MAX_METADATA_KEY_LEN: usize = 64;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid color for {field}: {issue}")]
    InvalidColor { field: String, issue: ColorIssue },

    #[error("Invalid metadata key {key:?} in {block}: {reason}")]
    InvalidMetadataKey {
        block: String,
        key: String,
        reason: String,
    },

    #[error("Too many metadata keys in {block}: {count} (max {max})")]
    TooManyMetadataKeys {
        block: String,
        count: usize,
        max: usize,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("{} validation errors: {}", .0.len(), join(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::MissingField(_) => 40,
            ValidationError::InvalidColor { .. } => 41,
            ValidationError::InvalidMetadataKey { .. } => 42,
            ValidationError::TooManyMetadataKeys { .. } => 43,
            ValidationError::InvalidValue { .. } => 44,
            ValidationError::Multiple(_) => 49,
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A non-blocking finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub field: String,
    pub message: String,
}

/// Every error and advisory found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub advisories: Vec<Advisory>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.advisories.extend(other.advisories);
    }

    /// Collapse into a single error (or the advisories if nothing blocks).
    pub fn into_result(mut self) -> ValidationResult<Vec<Advisory>> {
        match self.errors.len() {
            0 => Ok(self.advisories),
            1 => Err(self.errors.remove(0)),
            _ => Err(ValidationError::Multiple(self.errors)),
        }
    }

    /// Error and advisory messages, errors first.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .chain(
                self.advisories
                    .iter()
                    .map(|a| format!("{}: {}", a.field, a.message)),
            )
            .collect()
    }

    fn check_color(&mut self, field: &str, color: OklchColor) {
        for issue in swatch_color::validate(color).errors {
            if issue.is_blocking() {
                self.errors.push(ValidationError::InvalidColor {
                    field: field.to_string(),
                    issue,
                });
            } else {
                self.advisories.push(Advisory {
                    field: field.to_string(),
                    message: issue.to_string(),
                });
            }
        }
    }
}

/// Validate both brand colors.
pub fn validate_theme(theme: &ThemeConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check_color("theme.brand_primary", theme.brand_primary);
    if let Some(secondary) = theme.brand_secondary {
        report.check_color("theme.brand_secondary", secondary);
    }
    report
}

fn metadata_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("metadata key pattern"))
}

/// Validate content block titles and metadata keys.
pub fn validate_content(blocks: &[ContentBlock]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (i, block) in blocks.iter().enumerate() {
        let path = format!("content[{}]", i);

        if block.title().trim().is_empty() {
            report.errors.push(ValidationError::MissingField(format!("{path}.title")));
        }

        match block {
            ContentBlock::Services { items, .. } => {
                for (j, item) in items.iter().enumerate() {
                    if item.name.trim().is_empty() {
                        report
                            .errors
                            .push(ValidationError::MissingField(format!("{path}.items[{j}].name")));
                    }
                }
            }
            ContentBlock::Portfolio { projects, .. } => {
                for (j, project) in projects.iter().enumerate() {
                    if project.name.trim().is_empty() {
                        report.errors.push(ValidationError::MissingField(format!(
                            "{path}.projects[{j}].name"
                        )));
                    }
                }
            }
            ContentBlock::Hero {
                cta_label,
                cta_href,
                ..
            } => {
                if cta_label.is_some() != cta_href.is_some() {
                    report.errors.push(ValidationError::InvalidValue {
                        field: format!("{path}.cta"),
                        message: "cta_label and cta_href must be set together".to_string(),
                    });
                }
            }
        }

        let metadata = block.metadata();
        if metadata.len() > MAX_METADATA_KEYS {
            report.errors.push(ValidationError::TooManyMetadataKeys {
                block: path.clone(),
                count: metadata.len(),
                max: MAX_METADATA_KEYS,
            });
        }
        for key in metadata.keys() {
            if let Some(reason) = metadata_key_problem(key) {
                report.errors.push(ValidationError::InvalidMetadataKey {
                    block: path.clone(),
                    key: key.clone(),
                    reason,
                });
            }
        }
    }

    report
}

fn metadata_key_problem(key: &str) -> Option<String> {
    if key.len() > MAX_METADATA_KEY_LEN {
        Some(format!("longer than {} characters", MAX_METADATA_KEY_LEN))
    } else if !metadata_key_pattern().is_match(key) {
        Some("must match ^[a-z][a-z0-9_]*$".to_string())
    } else {
        None
    }
}

/// Validate the whole site configuration.
pub fn validate_site(site: &SiteConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if site.site.title.trim().is_empty() {
        report.errors.push(ValidationError::MissingField("site.title".to_string()));
    }
    if let Some(url) = &site.site.base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            report.errors.push(ValidationError::InvalidValue {
                field: "site.base_url".to_string(),
                message: format!("must start with http:// or https://, got {url:?}"),
            });
        }
    }

    report.merge(validate_theme(&site.theme));
    report.merge(validate_content(&site.content));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MetadataValue;
    use std::collections::BTreeMap;
    use swatch_color::ColorField;

    fn hero(metadata: BTreeMap<String, MetadataValue>) -> ContentBlock {
        ContentBlock::Hero {
            title: "Hi".into(),
            subtitle: None,
            cta_label: None,
            cta_href: None,
            metadata,
        }
    }

    #[test]
    fn default_theme_is_valid() {
        let report = validate_theme(&ThemeConfig::default());
        assert!(report.is_valid());
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn collects_every_color_problem() {
        let theme = ThemeConfig {
            brand_primary: OklchColor::new(150.0, 0.5, 262.0),
            brand_secondary: Some(OklchColor::new(60.0, 0.1, 400.0)),
            ..ThemeConfig::default()
        };
        let report = validate_theme(&theme);
        assert_eq!(report.errors.len(), 3);
        assert!(matches!(
            &report.errors[0],
            ValidationError::InvalidColor { field, issue: ColorIssue::OutOfRange { field: ColorField::Lightness, .. } }
                if field == "theme.brand_primary"
        ));
        assert_eq!(report.errors[2].code(), 41);
    }

    #[test]
    fn advisory_does_not_block() {
        let theme = ThemeConfig {
            brand_primary: OklchColor::new(10.0, 0.35, 0.0),
            ..ThemeConfig::default()
        };
        let report = validate_theme(&theme);
        assert!(report.is_valid());
        assert_eq!(report.advisories.len(), 1);
        assert_eq!(report.advisories[0].message, swatch_color::ACCESSIBILITY_ADVISORY);
        assert_eq!(report.into_result().unwrap().len(), 1);
    }

    #[test]
    fn metadata_keys_are_checked() {
        let mut meta = BTreeMap::new();
        meta.insert("good_key".to_string(), MetadataValue::Bool(true));
        meta.insert("Bad".to_string(), MetadataValue::Bool(true));
        meta.insert("1st".to_string(), MetadataValue::Bool(true));
        meta.insert("a".repeat(65), MetadataValue::Bool(true));

        let report = validate_content(&[hero(meta)]);
        assert_eq!(report.errors.len(), 3);
        assert!(report
            .errors
            .iter()
            .all(|e| matches!(e, ValidationError::InvalidMetadataKey { .. })));
    }

    #[test]
    fn too_many_metadata_keys() {
        let meta = (0..=MAX_METADATA_KEYS)
            .map(|i| (format!("k{i}"), MetadataValue::Number(i as f64)))
            .collect();
        let report = validate_content(&[hero(meta)]);
        assert_eq!(
            report.errors,
            vec![ValidationError::TooManyMetadataKeys {
                block: "content[0]".into(),
                count: MAX_METADATA_KEYS + 1,
                max: MAX_METADATA_KEYS,
            }]
        );
    }

    #[test]
    fn half_configured_cta_is_rejected() {
        let block = ContentBlock::Hero {
            title: "Hi".into(),
            subtitle: None,
            cta_label: Some("Contact".into()),
            cta_href: None,
            metadata: BTreeMap::new(),
        };
        let report = validate_content(&[block]);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code(), 44);
    }

    #[test]
    fn into_result_wraps_multiple() {
        let report = ValidationReport {
            errors: vec![
                ValidationError::MissingField("a".into()),
                ValidationError::MissingField("b".into()),
            ],
            advisories: vec![],
        };
        let err = report.into_result().unwrap_err();
        assert_eq!(err.code(), 49);
        assert!(err.to_string().starts_with("2 validation errors"));
    }
}
