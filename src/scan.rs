//! Scan orchestration
//!
//! Classifies every template of the active theme in one synchronous
//! pass, persists usage flags and title prefixes best-effort, and
//! aggregates counts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::SlugClassifier;
use crate::config::{ScanConfig, DEFAULT_PREFIX};
use crate::error::Result;
use crate::inventory::{ContentInventory, InventorySnapshot};
use crate::store::TemplateStore;
use crate::template::{Template, UsageFlag};

/// Three-number result of a scan run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Templates scanned
    pub total: usize,
    /// Detected as in use
    pub in_use: usize,
    /// Marked not in use
    pub not_in_use_marked: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Templates scanned: {}. Detected as in use: {}. Marked \"Not in use\": {}.",
            self.total, self.in_use, self.not_in_use_marked
        )
    }
}

/// Classify every template owned by the configured theme and persist
/// its usage flag.
///
/// The inventory snapshot is captured once and shared across the whole
/// run; templates are processed in title order (id as tie-break) with
/// no pagination. Per-template persistence failures are logged and do
/// not stop the scan or change the counts.
#[tracing::instrument(skip(store, inventory), fields(theme = %config.theme_id))]
pub fn scan_and_mark(
    store: &mut dyn TemplateStore,
    inventory: &dyn ContentInventory,
    config: &ScanConfig,
) -> Result<ScanSummary> {
    let snapshot = InventorySnapshot::capture(inventory)?;
    let classifier = SlugClassifier::new(&config.theme_id, &snapshot, inventory);

    let mut templates = store.templates_for_theme(&config.theme_id)?;
    templates.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

    let mut summary = ScanSummary::default();
    for template in &templates {
        summary.total += 1;
        if classifier.is_in_use(&template.slug)? {
            tracing::debug!(slug = %template.slug, "template in use");
            mark_in_use(store, template, config);
            summary.in_use += 1;
        } else {
            tracing::debug!(slug = %template.slug, "template not in use");
            mark_not_in_use(store, template, config);
            summary.not_in_use_marked += 1;
        }
    }

    tracing::info!(
        total = summary.total,
        in_use = summary.in_use,
        not_in_use = summary.not_in_use_marked,
        "scan complete"
    );
    Ok(summary)
}

/// Remove the usage flag and both prefixes from every template of the
/// theme, regardless of current flag state.
///
/// Returns the number of templates processed, not the number changed.
#[tracing::instrument(skip(store), fields(theme = %config.theme_id))]
pub fn clear_all(store: &mut dyn TemplateStore, config: &ScanConfig) -> Result<usize> {
    let templates = store.templates_for_theme(&config.theme_id)?;
    let mut count = 0;
    for template in &templates {
        if let Err(err) = store.clear_usage_flag(template.id) {
            tracing::warn!(id = template.id, error = %err, "failed to clear usage flag");
        }
        if let Some(stripped) = strip_unused_prefix(&template.title, &config.prefix) {
            if let Err(err) = store.set_title(template.id, &stripped) {
                tracing::warn!(id = template.id, error = %err, "failed to persist title");
            }
        }
        count += 1;
    }
    tracing::info!(count, "cleared usage flags");
    Ok(count)
}

/// Flag a template as in use, stripping the unused prefix from its
/// title when prefixing mode is on
fn mark_in_use(store: &mut dyn TemplateStore, template: &Template, config: &ScanConfig) {
    if let Err(err) = store.set_usage_flag(template.id, UsageFlag::InUse) {
        tracing::warn!(id = template.id, error = %err, "failed to persist usage flag");
    }
    if !config.add_prefix_on_unused {
        return;
    }
    if let Some(stripped) = strip_unused_prefix(&template.title, &config.prefix) {
        if let Err(err) = store.set_title(template.id, &stripped) {
            tracing::warn!(id = template.id, error = %err, "failed to persist title");
        }
    }
}

/// Flag a template as not in use, prepending the unused prefix to its
/// title when prefixing mode is on
fn mark_not_in_use(store: &mut dyn TemplateStore, template: &Template, config: &ScanConfig) {
    if let Err(err) = store.set_usage_flag(template.id, UsageFlag::NotInUse) {
        tracing::warn!(id = template.id, error = %err, "failed to persist usage flag");
    }
    if config.add_prefix_on_unused && !template.title.starts_with(&config.prefix) {
        let title = format!("{}{}", config.prefix, template.title);
        if let Err(err) = store.set_title(template.id, &title) {
            tracing::warn!(id = template.id, error = %err, "failed to persist title");
        }
    }
}

/// Strip one leading occurrence of the configured or the compiled-in
/// default prefix, consuming whitespace that follows it.
///
/// Returns `None` when the title carries neither prefix. The default is
/// always recognized so titles marked under an older prefix setting
/// remain strippable.
pub fn strip_unused_prefix(title: &str, prefix: &str) -> Option<String> {
    for candidate in [prefix, DEFAULT_PREFIX] {
        if candidate.is_empty() {
            continue;
        }
        if let Some(rest) = title.strip_prefix(candidate) {
            return Some(rest.trim_start().to_string());
        }
    }
    None
}
