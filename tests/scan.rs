//! Integration tests for scan and clear orchestration

use template_usage::config::{ScanConfig, DEFAULT_PREFIX};
use template_usage::content::{
    ContentItem, ContentPage, ContentStatus, TaxonomyTerm, CATEGORY_TAXONOMY,
};
use template_usage::inventory::MemoryInventory;
use template_usage::scan::{clear_all, scan_and_mark};
use template_usage::store::MemoryTemplateStore;
use template_usage::template::{Template, UsageFlag};

fn fixture_site() -> (MemoryTemplateStore, MemoryInventory) {
    let mut store = MemoryTemplateStore::new();
    store.insert(Template::new(1, "index", "Index", "mytheme"));
    store.insert(Template::new(2, "page-about-us", "About page", "mytheme"));
    store.insert(Template::new(3, "single-post-123", "Launch post", "mytheme"));
    store.insert(Template::new(4, "category-news", "News archive", "mytheme"));
    store.insert(Template::new(5, "custom-landing", "Landing", "mytheme"));
    store.insert(Template::new(6, "old-promo", "Old promo", "mytheme"));
    store.insert(Template::new(7, "index", "Other index", "othertheme"));

    let mut inventory = MemoryInventory::with_builtins();
    inventory.add_page(ContentPage::new(10, "about-us", ContentStatus::Published));
    inventory.add_item(ContentItem::new(
        123,
        "launch",
        "post",
        ContentStatus::Published,
    ));
    inventory.add_term(TaxonomyTerm::new(7, "news", CATEGORY_TAXONOMY));
    inventory.record_assignment("mytheme//custom-landing");

    (store, inventory)
}

#[test]
fn test_scan_counts_and_flags() {
    let (mut store, inventory) = fixture_site();
    let config = ScanConfig::new("mytheme");

    let summary = scan_and_mark(&mut store, &inventory, &config).unwrap();
    assert_eq!(summary.total, 6);
    assert_eq!(summary.in_use, 5);
    assert_eq!(summary.not_in_use_marked, 1);

    for id in [1, 2, 3, 4, 5] {
        assert_eq!(store.get(id).unwrap().flag, Some(UsageFlag::InUse));
    }
    assert_eq!(store.get(6).unwrap().flag, Some(UsageFlag::NotInUse));
}

#[test]
fn test_scan_leaves_other_themes_alone() {
    let (mut store, inventory) = fixture_site();
    let config = ScanConfig::new("mytheme");

    scan_and_mark(&mut store, &inventory, &config).unwrap();
    assert_eq!(store.get(7).unwrap().flag, None);
    assert_eq!(store.get(7).unwrap().title, "Other index");
}

#[test]
fn test_scan_without_prefix_mode_keeps_titles() {
    let (mut store, inventory) = fixture_site();
    let config = ScanConfig::new("mytheme");

    scan_and_mark(&mut store, &inventory, &config).unwrap();
    assert_eq!(store.get(6).unwrap().title, "Old promo");
}

#[test]
fn test_scan_is_idempotent() {
    let (mut store, inventory) = fixture_site();
    let mut config = ScanConfig::new("mytheme");
    config.add_prefix_on_unused = true;

    let first = scan_and_mark(&mut store, &inventory, &config).unwrap();
    let flags_after_first: Vec<_> = store.templates().iter().map(|t| t.flag).collect();
    let titles_after_first: Vec<_> =
        store.templates().iter().map(|t| t.title.clone()).collect();

    let second = scan_and_mark(&mut store, &inventory, &config).unwrap();
    let flags_after_second: Vec<_> = store.templates().iter().map(|t| t.flag).collect();
    let titles_after_second: Vec<_> =
        store.templates().iter().map(|t| t.title.clone()).collect();

    assert_eq!(first, second);
    assert_eq!(flags_after_first, flags_after_second);
    assert_eq!(titles_after_first, titles_after_second);
}

#[test]
fn test_prefix_added_once() {
    let (mut store, inventory) = fixture_site();
    let mut config = ScanConfig::new("mytheme");
    config.add_prefix_on_unused = true;

    scan_and_mark(&mut store, &inventory, &config).unwrap();
    scan_and_mark(&mut store, &inventory, &config).unwrap();

    let expected = format!("{}Old promo", DEFAULT_PREFIX);
    assert_eq!(store.get(6).unwrap().title, expected);
}

#[test]
fn test_mark_round_trip_restores_title() {
    let (mut store, mut inventory) = fixture_site();
    let mut config = ScanConfig::new("mytheme");
    config.add_prefix_on_unused = true;

    scan_and_mark(&mut store, &inventory, &config).unwrap();
    assert_eq!(
        store.get(6).unwrap().title,
        format!("{}Old promo", DEFAULT_PREFIX)
    );

    // the template gains a stored assignment, so the next scan flips it
    inventory.record_assignment("mytheme//old-promo");
    scan_and_mark(&mut store, &inventory, &config).unwrap();

    assert_eq!(store.get(6).unwrap().flag, Some(UsageFlag::InUse));
    assert_eq!(store.get(6).unwrap().title, "Old promo");
}

#[test]
fn test_stale_default_prefix_still_stripped() {
    let (mut store, inventory) = fixture_site();
    store.insert(Template::new(
        8,
        "page-about-us",
        format!("{}About copy", DEFAULT_PREFIX),
        "mytheme",
    ));

    let mut config = ScanConfig::new("mytheme");
    config.prefix = "[unused] ".to_string();
    config.add_prefix_on_unused = true;

    scan_and_mark(&mut store, &inventory, &config).unwrap();
    assert_eq!(store.get(8).unwrap().title, "About copy");
}

#[test]
fn test_clear_all_removes_flags_and_prefixes() {
    let (mut store, inventory) = fixture_site();
    let mut config = ScanConfig::new("mytheme");
    config.add_prefix_on_unused = true;

    scan_and_mark(&mut store, &inventory, &config).unwrap();
    let cleared = clear_all(&mut store, &config).unwrap();
    assert_eq!(cleared, 6);

    for template in store.templates() {
        if template.theme != "mytheme" {
            continue;
        }
        assert_eq!(template.flag, None);
        assert!(!template.title.starts_with(&config.prefix));
        assert!(!template.title.starts_with(DEFAULT_PREFIX));
    }
    assert_eq!(store.get(6).unwrap().title, "Old promo");
}

#[test]
fn test_clear_all_counts_processed_not_changed() {
    let (mut store, _) = fixture_site();
    let config = ScanConfig::new("mytheme");

    // nothing was ever marked, still every theme template is processed
    let cleared = clear_all(&mut store, &config).unwrap();
    assert_eq!(cleared, 6);
}

#[test]
fn test_scan_empty_theme() {
    let mut store = MemoryTemplateStore::new();
    let inventory = MemoryInventory::with_builtins();
    let config = ScanConfig::new("mytheme");

    let summary = scan_and_mark(&mut store, &inventory, &config).unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.in_use, 0);
    assert_eq!(summary.not_in_use_marked, 0);
}
