//! Slug classification: decides whether a template is referenced
//!
//! First-match-wins over the naming-convention hierarchy: protected
//! roots, then page templates, then single templates, then taxonomy
//! templates. Whatever falls through is settled by exact matching
//! against the stored assignment values.

use crate::content::{CATEGORY_TAXONOMY, TAG_TAXONOMY};
use crate::error::Result;
use crate::inventory::{ContentInventory, InventorySnapshot};
use crate::text::{is_numeric, slugify};

/// Base hierarchy roots the rendering system always consults; templates
/// with these short-names are never orphaned.
pub const PROTECTED_SLUGS: &[&str] = &[
    "index",
    "home",
    "front-page",
    "page",
    "single",
    "archive",
    "category",
    "tag",
    "taxonomy",
    "author",
    "date",
    "search",
    "404",
    "attachment",
];

/// Whether the short-name is one of the protected hierarchy roots
pub fn is_protected_slug(slug: &str) -> bool {
    PROTECTED_SLUGS.contains(&slug)
}

/// Raw values a page-template binding can carry for a template slug.
///
/// The bare slug survives migrations and imports that stored no theme
/// qualifier.
pub fn candidate_assignment_values(theme_id: &str, slug: &str) -> [String; 3] {
    [
        format!("{}//{}", theme_id, slug),
        format!("{}//templates/{}", theme_id, slug),
        slug.to_string(),
    ]
}

/// Rule-chain evaluator for one scan run.
///
/// Borrows the per-run snapshot for page and assignment lookups and the
/// live inventory for on-demand item and term lookups.
pub struct SlugClassifier<'a> {
    theme_id: &'a str,
    snapshot: &'a InventorySnapshot,
    inventory: &'a dyn ContentInventory,
}

impl<'a> SlugClassifier<'a> {
    pub fn new(
        theme_id: &'a str,
        snapshot: &'a InventorySnapshot,
        inventory: &'a dyn ContentInventory,
    ) -> Self {
        Self {
            theme_id,
            snapshot,
            inventory,
        }
    }

    /// Evaluate the rule chain for a template short-name.
    ///
    /// Rules are tried in order and the first match decides. The stored
    /// value rule is terminal: when nothing earlier matched, its
    /// verdict stands.
    pub fn is_in_use(&self, slug: &str) -> Result<bool> {
        if is_protected_slug(slug) {
            return Ok(true);
        }
        if self.page_rule(slug) {
            return Ok(true);
        }
        if self.single_rule(slug)? {
            return Ok(true);
        }
        if self.taxonomy_rule(slug)? {
            return Ok(true);
        }
        Ok(self.stored_value_rule(slug))
    }

    /// `page-{id|slug}`: the page must exist in the index
    fn page_rule(&self, slug: &str) -> bool {
        let Some(tail) = slug.strip_prefix("page-") else {
            return false;
        };
        if is_numeric(tail) {
            return tail
                .parse::<u64>()
                .map(|id| self.snapshot.pages.contains_id(id))
                .unwrap_or(false);
        }
        self.snapshot.pages.contains_slug(&slugify(tail))
    }

    /// `single`, `single-{type}`, `single-{type}-{id|slug}`
    fn single_rule(&self, slug: &str) -> Result<bool> {
        if !slug.starts_with("single") {
            return Ok(false);
        }
        let parts: Vec<&str> = slug.split('-').collect();
        if parts.len() == 1 {
            // bare single applies globally
            return Ok(true);
        }
        let content_type = parts[1];
        if content_type.is_empty() {
            return Ok(true);
        }
        if !self.inventory.content_type_exists(content_type)? {
            return Ok(false);
        }
        if parts.len() == 2 {
            // single-{type} applies globally for that type
            return Ok(true);
        }
        let tail = parts[2..].join("-");
        if tail.is_empty() {
            return Ok(true);
        }
        if is_numeric(&tail) {
            return Ok(match tail.parse::<u64>() {
                Ok(id) => self.inventory.content_item_by_id(id, content_type)?.is_some(),
                Err(_) => false,
            });
        }
        Ok(self
            .inventory
            .content_item_by_slug(&slugify(&tail), content_type)?
            .is_some())
    }

    /// `taxonomy-{tax}-{term}`, `category-{term}`, `tag-{term}`
    fn taxonomy_rule(&self, slug: &str) -> Result<bool> {
        if slug.starts_with("taxonomy") {
            // at most three pieces so the term keeps its hyphens
            let parts: Vec<&str> = slug.splitn(3, '-').collect();
            if parts.len() == 1 {
                return Ok(true);
            }
            let taxonomy = parts[1];
            if taxonomy.is_empty() || !self.inventory.taxonomy_exists(taxonomy)? {
                return Ok(false);
            }
            if parts.len() == 2 {
                return Ok(true);
            }
            return self.term_resolves(parts[2], taxonomy);
        }
        if slug.starts_with("category") {
            let parts: Vec<&str> = slug.splitn(2, '-').collect();
            if parts.len() == 1 {
                return Ok(true);
            }
            return self.term_resolves(parts[1], CATEGORY_TAXONOMY);
        }
        if slug.starts_with("tag") {
            let parts: Vec<&str> = slug.splitn(2, '-').collect();
            if parts.len() == 1 {
                return Ok(true);
            }
            return self.term_resolves(parts[1], TAG_TAXONOMY);
        }
        Ok(false)
    }

    /// A term part (numeric id or slug, possibly empty) against a
    /// taxonomy
    fn term_resolves(&self, term_part: &str, taxonomy: &str) -> Result<bool> {
        if term_part.is_empty() {
            return Ok(true);
        }
        if is_numeric(term_part) {
            return Ok(match term_part.parse::<u64>() {
                Ok(id) => self.inventory.term_by_id(id, taxonomy)?.is_some(),
                Err(_) => false,
            });
        }
        Ok(self
            .inventory
            .term_by_slug(&slugify(term_part), taxonomy)?
            .is_some())
    }

    /// Terminal rule: exact match against stored assignment values
    fn stored_value_rule(&self, slug: &str) -> bool {
        candidate_assignment_values(self.theme_id, slug)
            .iter()
            .any(|candidate| self.snapshot.assignment_values.contains(candidate))
    }
}
