//! Template store: persisted template records and their mutations

pub mod memory;

use crate::error::Result;
use crate::template::{Template, UsageFlag};

pub use memory::MemoryTemplateStore;

/// Read and write access to the persisted template records.
///
/// Mutations are independent per template and idempotent on retry; the
/// orchestrator treats individual failures as best-effort and keeps
/// going.
pub trait TemplateStore {
    /// All templates owned by the given theme, in no particular order
    fn templates_for_theme(&self, theme_id: &str) -> Result<Vec<Template>>;

    /// Persist the usage flag for a template
    fn set_usage_flag(&mut self, id: u64, flag: UsageFlag) -> Result<()>;

    /// Remove the usage flag metadata entirely, back to never-scanned
    fn clear_usage_flag(&mut self, id: u64) -> Result<()>;

    /// Persist a new title for a template
    fn set_title(&mut self, id: u64, title: &str) -> Result<()>;
}
