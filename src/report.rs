//! Machine-readable scan reports
//!
//! Collaborators that render or persist the outcome of a run consume
//! these instead of reaching into the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scan::ScanSummary;

/// Outcome of one scan run, stamped on completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Theme whose templates were scanned
    pub theme_id: String,
    /// When the run finished
    pub completed_at: DateTime<Utc>,
    /// Aggregate counts
    #[serde(flatten)]
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Stamp a completed run
    pub fn new(theme_id: impl Into<String>, summary: ScanSummary) -> Self {
        Self {
            theme_id: theme_id.into(),
            completed_at: Utc::now(),
            summary,
        }
    }

    /// Serialize for persistence or transport
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.theme_id, self.summary)
    }
}
