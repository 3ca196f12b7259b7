//! Content records consumed by the classifier
//!
//! Read-only facts about the site: pages, content entries of registered
//! content types, and taxonomy terms. The classifier never mutates any
//! of these.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Built-in taxonomy backing `category` templates
pub const CATEGORY_TAXONOMY: &str = "category";

/// Built-in taxonomy backing `tag` templates
pub const TAG_TAXONOMY: &str = "post_tag";

/// Publication status of a page or content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Published,
    Draft,
    Pending,
    Scheduled,
    Private,
    Trashed,
}

impl ContentStatus {
    /// All valid status names
    pub const VALID_STATUSES: &'static [&'static str] = &[
        "published",
        "draft",
        "pending",
        "scheduled",
        "private",
        "trashed",
    ];

    /// Whether hierarchy lookups may see records with this status.
    ///
    /// Trashed records are invisible to the scan.
    pub fn is_queryable(self) -> bool {
        !matches!(self, ContentStatus::Trashed)
    }
}

impl FromStr for ContentStatus {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "published" => Ok(ContentStatus::Published),
            "draft" => Ok(ContentStatus::Draft),
            "pending" => Ok(ContentStatus::Pending),
            "scheduled" => Ok(ContentStatus::Scheduled),
            "private" => Ok(ContentStatus::Private),
            "trashed" => Ok(ContentStatus::Trashed),
            other => Err(ScanError::InvalidValue {
                context: "content status".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentStatus::Published => write!(f, "published"),
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::Pending => write!(f, "pending"),
            ContentStatus::Scheduled => write!(f, "scheduled"),
            ContentStatus::Private => write!(f, "private"),
            ContentStatus::Trashed => write!(f, "trashed"),
        }
    }
}

/// A content page, indexed once per scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPage {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub status: ContentStatus,
}

impl ContentPage {
    pub fn new(id: u64, slug: impl Into<String>, status: ContentStatus) -> Self {
        Self {
            id,
            slug: slug.into(),
            status,
        }
    }
}

/// A content entry of a registered content type, looked up on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub slug: String,
    pub content_type: String,
    #[serde(default)]
    pub status: ContentStatus,
}

impl ContentItem {
    pub fn new(
        id: u64,
        slug: impl Into<String>,
        content_type: impl Into<String>,
        status: ContentStatus,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            content_type: content_type.into(),
            status,
        }
    }
}

/// A taxonomy term, looked up on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub slug: String,
    pub taxonomy: String,
}

impl TaxonomyTerm {
    pub fn new(id: u64, slug: impl Into<String>, taxonomy: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            taxonomy: taxonomy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for name in ContentStatus::VALID_STATUSES {
            let status: ContentStatus = name.parse().unwrap();
            assert_eq!(status.to_string(), *name);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("published".parse::<ContentStatus>().is_ok());
        assert!("future".parse::<ContentStatus>().is_err());
        assert!("".parse::<ContentStatus>().is_err());
    }

    #[test]
    fn test_queryable_statuses() {
        assert!(ContentStatus::Published.is_queryable());
        assert!(ContentStatus::Draft.is_queryable());
        assert!(ContentStatus::Pending.is_queryable());
        assert!(ContentStatus::Scheduled.is_queryable());
        assert!(ContentStatus::Private.is_queryable());
        assert!(!ContentStatus::Trashed.is_queryable());
    }
}
