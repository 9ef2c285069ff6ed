//! Integration tests for the built-in registry

use platonic::{Catalog, CategoryStatus, Maintenance, StatusFilter};
use std::collections::HashSet;

#[test]
fn test_ids_are_unique() {
    let catalog = Catalog::builtin();
    let ids: HashSet<&str> = catalog.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn test_confidence_in_range() {
    for entry in Catalog::builtin().entries() {
        assert!(
            (1..=5).contains(&entry.confidence),
            "{} has confidence {}",
            entry.id,
            entry.confidence
        );
    }
}

#[test]
fn test_review_dates_parse() {
    for entry in Catalog::builtin().entries() {
        assert!(entry.reviewed_on().is_some(), "{} has bad date", entry.id);
    }
}

#[test]
fn test_stats() {
    let stats = Catalog::builtin().stats();
    assert_eq!(stats.declared, 48);
    assert_eq!(stats.empty, 13);
    assert_eq!(stats.candidate, 5);
    assert_eq!(stats.deprecated, 0);
    assert_eq!(stats.total, 68);
}

#[test]
fn test_filter_all_returns_everything_in_order() {
    let catalog = Catalog::builtin();
    let all = catalog.filter(StatusFilter::All);
    assert_eq!(all.len(), 68);
    assert_eq!(all[0].id, "frying-pan");
}

#[test]
fn test_with_status_matches_stats() {
    let catalog = Catalog::builtin();
    let split = catalog.with_status(CategoryStatus::SplitRequired);
    assert_eq!(split.len(), 2);
    assert!(split.iter().all(|e| e.status == CategoryStatus::SplitRequired));
    assert!(catalog.with_status(CategoryStatus::Rejected).is_empty());
}

#[test]
fn test_get_trims_id() {
    let catalog = Catalog::builtin();
    let pan = catalog.get("  frying-pan ").unwrap();
    assert_eq!(pan.category, "Frying Pan");
    assert_eq!(pan.maintenance, Maintenance::Repairable);
    assert!(catalog.get("spork").is_none());
}

#[test]
fn test_search_matches_category_and_model() {
    let catalog = Catalog::builtin();

    let by_category = catalog.search("FRYING");
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id, "frying-pan");

    let by_model = catalog.search("lodge");
    assert!(by_model.iter().any(|e| e.id == "frying-pan"));

    assert!(catalog.search("   ").is_empty());
    assert!(catalog.search("zzzz-no-such-thing").is_empty());
}

#[test]
fn test_empty_categories_have_no_model() {
    for entry in Catalog::builtin().with_status(CategoryStatus::Empty) {
        assert!(entry.model.is_none(), "{} should have no model", entry.id);
        assert_eq!(entry.model_or_placeholder(), "Under Review");
    }
}

#[test]
fn test_entries_serialize_with_wire_names() {
    let pan = Catalog::builtin().get("frying-pan").unwrap();
    let value = serde_json::to_value(pan).unwrap();

    assert_eq!(value["status"], "DECLARED");
    assert_eq!(value["maintenance"], "REPAIRABLE");
    assert_eq!(value["lastReviewed"], "2026-01-16");
    assert_eq!(value["formDefinition"], pan.form_definition);
}
