//! In-memory template store backed by fixtures

use crate::error::{Result, ScanError};
use crate::template::{Template, UsageFlag};

use super::TemplateStore;

/// In-memory [`TemplateStore`] implementation for tests and embedding
/// hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: Vec<Template>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.push(template);
    }

    /// Direct access to a template by identifier
    pub fn get(&self, id: u64) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Template> {
        self.templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ScanError::TemplateNotFound { id })
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn templates_for_theme(&self, theme_id: &str) -> Result<Vec<Template>> {
        Ok(self
            .templates
            .iter()
            .filter(|t| t.theme == theme_id)
            .cloned()
            .collect())
    }

    fn set_usage_flag(&mut self, id: u64, flag: UsageFlag) -> Result<()> {
        self.get_mut(id)?.flag = Some(flag);
        Ok(())
    }

    fn clear_usage_flag(&mut self, id: u64) -> Result<()> {
        self.get_mut(id)?.flag = None;
        Ok(())
    }

    fn set_title(&mut self, id: u64, title: &str) -> Result<()> {
        self.get_mut(id)?.title = title.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_scoped_to_theme() {
        let mut store = MemoryTemplateStore::new();
        store.insert(Template::new(1, "index", "Index", "mytheme"));
        store.insert(Template::new(2, "index", "Index", "othertheme"));

        let templates = store.templates_for_theme("mytheme").unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, 1);
    }

    #[test]
    fn test_flag_and_title_mutations() {
        let mut store = MemoryTemplateStore::new();
        store.insert(Template::new(1, "index", "Index", "mytheme"));

        store.set_usage_flag(1, UsageFlag::NotInUse).unwrap();
        assert_eq!(store.get(1).unwrap().flag, Some(UsageFlag::NotInUse));

        store.set_title(1, "Renamed").unwrap();
        assert_eq!(store.get(1).unwrap().title, "Renamed");

        store.clear_usage_flag(1).unwrap();
        assert_eq!(store.get(1).unwrap().flag, None);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut store = MemoryTemplateStore::new();
        let err = store.set_usage_flag(99, UsageFlag::InUse).unwrap_err();
        assert!(matches!(err, ScanError::TemplateNotFound { id: 99 }));
    }
}
