//! Page content blocks.
//!
//! Each block kind has its own explicit fields. Free-form data goes into
//! `metadata`, whose values are restricted to a small closed set of shapes
//! and whose keys are checked in [`crate::validate::validate_content`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form metadata attached to a block.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Number(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::Text(v.to_string())
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(v: Vec<String>) -> Self {
        MetadataValue::List(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// One section of the site, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBlock {
    Hero {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cta_label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cta_href: Option<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        metadata: Metadata,
    },
    Services {
        title: String,
        #[serde(default)]
        items: Vec<ServiceItem>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        metadata: Metadata,
    },
    Portfolio {
        title: String,
        #[serde(default)]
        projects: Vec<Project>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        metadata: Metadata,
    },
}

impl ContentBlock {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Hero { .. } => "hero",
            ContentBlock::Services { .. } => "services",
            ContentBlock::Portfolio { .. } => "portfolio",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentBlock::Hero { title, .. }
            | ContentBlock::Services { title, .. }
            | ContentBlock::Portfolio { title, .. } => title,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            ContentBlock::Hero { metadata, .. }
            | ContentBlock::Services { metadata, .. }
            | ContentBlock::Portfolio { metadata, .. } => metadata,
        }
    }
}

impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind(), self.title())
    }
}
