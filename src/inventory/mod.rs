//! Content inventory: authoritative facts about the site
//!
//! The classifier never touches the content store directly; everything
//! it needs comes through the [`ContentInventory`] trait, so the
//! decision logic runs unchanged against a live store or against
//! fixtures.

pub mod memory;

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::content::{ContentItem, ContentPage, TaxonomyTerm};
use crate::error::Result;

pub use memory::MemoryInventory;

/// Read access to the site's content store.
///
/// Absence is never an error: point lookups return `Ok(None)` for
/// records that do not exist. The `Result` wrapper exists for backends
/// whose reads can genuinely fail.
pub trait ContentInventory {
    /// Every distinct non-empty raw value ever stored as an explicit
    /// page-template binding, site-wide (not scoped to a theme)
    fn stored_assignment_values(&self) -> Result<BTreeSet<String>>;

    /// Index of content pages in any queryable status
    fn page_index(&self) -> Result<PageIndex>;

    /// Whether a content type with this name is registered
    fn content_type_exists(&self, name: &str) -> Result<bool>;

    /// Whether a taxonomy with this name is registered
    fn taxonomy_exists(&self, name: &str) -> Result<bool>;

    /// Point lookup of a content item by identifier and owning type.
    ///
    /// Status is not consulted; an identifier match of the right type
    /// counts regardless of publication state.
    fn content_item_by_id(&self, id: u64, content_type: &str) -> Result<Option<ContentItem>>;

    /// Lookup of a content item by short-name within a type, restricted
    /// to queryable statuses
    fn content_item_by_slug(&self, slug: &str, content_type: &str)
        -> Result<Option<ContentItem>>;

    /// Point lookup of a taxonomy term by identifier within a taxonomy
    fn term_by_id(&self, id: u64, taxonomy: &str) -> Result<Option<TaxonomyTerm>>;

    /// Lookup of a taxonomy term by short-name within a taxonomy
    fn term_by_slug(&self, slug: &str, taxonomy: &str) -> Result<Option<TaxonomyTerm>>;
}

/// Page lookups for the `page-{slug|id}` hierarchy, built once per scan
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    by_slug: HashMap<String, u64>,
    by_id: HashSet<u64>,
}

impl PageIndex {
    /// Build the index from a page listing.
    ///
    /// Non-queryable pages are skipped. Pages with empty short-names
    /// are indexed by id only. When two pages share a short-name the
    /// last-seen one wins.
    pub fn build<'a, P>(pages: P) -> Self
    where
        P: IntoIterator<Item = &'a ContentPage>,
    {
        let mut by_slug = HashMap::new();
        let mut by_id = HashSet::new();
        for page in pages {
            if !page.status.is_queryable() {
                continue;
            }
            if !page.slug.is_empty() {
                by_slug.insert(page.slug.clone(), page.id);
            }
            by_id.insert(page.id);
        }
        Self { by_slug, by_id }
    }

    /// Whether a page with this identifier exists
    pub fn contains_id(&self, id: u64) -> bool {
        self.by_id.contains(&id)
    }

    /// Whether a page with this short-name exists
    pub fn contains_slug(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Identifier of the page with this short-name, if any
    pub fn id_for_slug(&self, slug: &str) -> Option<u64> {
        self.by_slug.get(slug).copied()
    }

    /// Number of indexed pages
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Facts captured once at the start of a run and shared across every
/// template in that run
#[derive(Debug, Clone)]
pub struct InventorySnapshot {
    /// Distinct raw page-template binding values, site-wide
    pub assignment_values: BTreeSet<String>,
    /// Page lookups for the page hierarchy
    pub pages: PageIndex,
}

impl InventorySnapshot {
    /// Capture the per-run snapshot from the live inventory
    pub fn capture(inventory: &dyn ContentInventory) -> Result<Self> {
        Ok(Self {
            assignment_values: inventory.stored_assignment_values()?,
            pages: inventory.page_index()?,
        })
    }
}
