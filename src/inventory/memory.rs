//! In-memory content inventory backed by fixtures

use std::collections::BTreeSet;

use crate::content::{
    ContentItem, ContentPage, TaxonomyTerm, CATEGORY_TAXONOMY, TAG_TAXONOMY,
};
use crate::error::Result;

use super::{ContentInventory, PageIndex};

/// In-memory [`ContentInventory`] implementation.
///
/// Used by tests and by embedding hosts that already hold the site
/// inventory in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    pages: Vec<ContentPage>,
    items: Vec<ContentItem>,
    terms: Vec<TaxonomyTerm>,
    content_types: BTreeSet<String>,
    taxonomies: BTreeSet<String>,
    assignment_values: BTreeSet<String>,
}

impl MemoryInventory {
    /// Empty inventory with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory with the built-in content types (`post`, `page`) and
    /// taxonomies (category, tag) registered
    pub fn with_builtins() -> Self {
        let mut inventory = Self::default();
        inventory.register_content_type("post");
        inventory.register_content_type("page");
        inventory.register_taxonomy(CATEGORY_TAXONOMY);
        inventory.register_taxonomy(TAG_TAXONOMY);
        inventory
    }

    pub fn register_content_type(&mut self, name: &str) {
        self.content_types.insert(name.to_string());
    }

    pub fn register_taxonomy(&mut self, name: &str) {
        self.taxonomies.insert(name.to_string());
    }

    pub fn add_page(&mut self, page: ContentPage) {
        self.pages.push(page);
    }

    pub fn add_item(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    pub fn add_term(&mut self, term: TaxonomyTerm) {
        self.terms.push(term);
    }

    /// Record a raw page-template binding value.
    ///
    /// Empty values are ignored, matching the distinct-non-empty
    /// snapshot contract.
    pub fn record_assignment(&mut self, value: &str) {
        if !value.is_empty() {
            self.assignment_values.insert(value.to_string());
        }
    }
}

impl ContentInventory for MemoryInventory {
    fn stored_assignment_values(&self) -> Result<BTreeSet<String>> {
        Ok(self.assignment_values.clone())
    }

    fn page_index(&self) -> Result<PageIndex> {
        Ok(PageIndex::build(&self.pages))
    }

    fn content_type_exists(&self, name: &str) -> Result<bool> {
        Ok(self.content_types.contains(name))
    }

    fn taxonomy_exists(&self, name: &str) -> Result<bool> {
        Ok(self.taxonomies.contains(name))
    }

    fn content_item_by_id(&self, id: u64, content_type: &str) -> Result<Option<ContentItem>> {
        Ok(self
            .items
            .iter()
            .find(|item| item.id == id && item.content_type == content_type)
            .cloned())
    }

    fn content_item_by_slug(
        &self,
        slug: &str,
        content_type: &str,
    ) -> Result<Option<ContentItem>> {
        Ok(self
            .items
            .iter()
            .find(|item| {
                item.slug == slug
                    && item.content_type == content_type
                    && item.status.is_queryable()
            })
            .cloned())
    }

    fn term_by_id(&self, id: u64, taxonomy: &str) -> Result<Option<TaxonomyTerm>> {
        Ok(self
            .terms
            .iter()
            .find(|term| term.id == id && term.taxonomy == taxonomy)
            .cloned())
    }

    fn term_by_slug(&self, slug: &str, taxonomy: &str) -> Result<Option<TaxonomyTerm>> {
        Ok(self
            .terms
            .iter()
            .find(|term| term.slug == slug && term.taxonomy == taxonomy)
            .cloned())
    }
}
