//! Template records: the unit being classified

use std::fmt;

use serde::{Deserialize, Serialize};

/// Usage flag persisted against a template after a scan.
///
/// Raw metadata values are `0` (in use) and `1` (not in use); an absent
/// flag means the template was never scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageFlag {
    InUse,
    NotInUse,
}

impl UsageFlag {
    /// Raw metadata value for this flag
    pub fn as_meta_value(self) -> u8 {
        match self {
            UsageFlag::InUse => 0,
            UsageFlag::NotInUse => 1,
        }
    }

    /// Decode a raw metadata value
    pub fn from_meta_value(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(UsageFlag::InUse),
            1 => Some(UsageFlag::NotInUse),
            _ => None,
        }
    }
}

impl fmt::Display for UsageFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageFlag::InUse => write!(f, "in use"),
            UsageFlag::NotInUse => write!(f, "not in use"),
        }
    }
}

/// A themeable layout record consumed by the rendering system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    /// Short-name keying the template into the rendering hierarchy
    pub slug: String,
    pub title: String,
    /// Identifier of the owning theme
    pub theme: String,
    /// Usage flag; `None` until the template is first scanned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<UsageFlag>,
}

impl Template {
    pub fn new(
        id: u64,
        slug: impl Into<String>,
        title: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            theme: theme.into(),
            flag: None,
        }
    }

    /// Whether the last scan marked this template as orphaned
    pub fn is_marked_not_in_use(&self) -> bool {
        matches!(self.flag, Some(UsageFlag::NotInUse))
    }
}
