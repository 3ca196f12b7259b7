//! Scan configuration
//!
//! The theme identity, title prefix, and prefixing mode are explicit
//! inputs to every run rather than ambient state. Collaborators that
//! persist the prefix setting can load and save it as TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Compiled-in default for the unused-title prefix.
///
/// Stripping always recognizes this value even after the configured
/// prefix has changed, so previously marked titles remain strippable.
pub const DEFAULT_PREFIX: &str = "Not In Use — ";

/// Explicit inputs for a scan or clear run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Identifier of the active theme whose templates are scanned
    pub theme_id: String,

    /// Prefix added to and stripped from titles of unused templates
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Add the prefix when marking a template unused, and strip it when
    /// marking one in use
    #[serde(default)]
    pub add_prefix_on_unused: bool,
}

impl ScanConfig {
    /// Config for a theme with the default prefix and prefixing off
    pub fn new(theme_id: impl Into<String>) -> Self {
        Self {
            theme_id: theme_id.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            add_prefix_on_unused: false,
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScanConfig = toml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScanError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Sanitize a stored prefix: trim it, and fall back to the default
    /// when nothing remains
    pub fn normalized(mut self) -> Self {
        let trimmed = self.prefix.trim();
        self.prefix = if trimmed.is_empty() {
            DEFAULT_PREFIX.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}
