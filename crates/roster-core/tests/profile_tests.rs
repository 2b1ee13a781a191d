//! End-to-end profile assembly tests

mod common;

use common::fixtures::{fixture_path, load_fixture, record};
use proptest::prelude::*;
use roster_core::roster_domain::{DisplayAuthor, IssueKind};
use roster_core::{build_profile, sort_for_profile, ProfileInput, RosterConfig};

fn wei_zhang_profile() -> ProfileInput {
    ProfileInput::from_json(&load_fixture("profile_wei_zhang.json")).unwrap()
}

// === Fixture Profile ===

#[test]
fn test_profile_display_order() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    let ids: Vec<&str> = result.records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["p-pinned", "p-2023", "p-nocite", "p-2019"]);
}

#[test]
fn test_draft_publication_excluded() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    assert!(result.records.iter().all(|r| r.id() != "p-draft"));
}

#[test]
fn test_citation_byline_reconciled() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    let record = result.records.iter().find(|r| r.id() == "p-2019").unwrap();

    assert_eq!(record.byline(), "Wei Zhang, Lee J., John Smith");
    assert_eq!(record.internal_member_ids(), vec!["m-zhang", "m-smith"]);
    match &record.display_authors[0] {
        DisplayAuthor::Internal {
            is_corresponding, ..
        } => assert!(*is_corresponding),
        other => panic!("expected internal author, got {:?}", other),
    }
}

#[test]
fn test_chinese_fragment_links_profile_member() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    let record = result.records.iter().find(|r| r.id() == "p-2023").unwrap();

    assert_eq!(record.internal_member_ids(), vec!["m-chen", "m-zhang"]);
    assert_eq!(record.display_authors[1].citation_position(), 1);
    assert_eq!(record.display_authors[2].label(), "R. Gupta");
}

#[test]
fn test_missing_citation_falls_back_and_reports() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    let record = result.records.iter().find(|r| r.id() == "p-nocite").unwrap();

    assert_eq!(record.internal_member_ids(), vec!["m-zhang", "m-smith"]);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::MissingCitationString);
    assert_eq!(result.issues[0].publication_id, "p-nocite");
}

#[test]
fn test_featured_and_pinned_fields_copied() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    let featured: Vec<&str> = result.featured().into_iter().map(|r| r.id()).collect();
    assert_eq!(featured, vec!["p-pinned", "p-2023"]);
    assert_eq!(result.records[0].profile_display_order, Some(1));
}

#[test]
fn test_profile_input_load() {
    let input = ProfileInput::load(fixture_path("profile_wei_zhang.json")).unwrap();
    assert_eq!(input.member.id, "m-zhang");
    assert_eq!(input.publications.len(), 5);
}

#[test]
fn test_output_serializes_for_renderer() {
    let result = build_profile(&wei_zhang_profile(), &RosterConfig::default());
    let json = serde_json::to_value(&result.records).unwrap();
    assert_eq!(json[0]["id"], "p-pinned");
    assert_eq!(json[0]["display_authors"][0]["kind"], "internal");
    assert_eq!(json[0]["display_authors"][0]["member_id"], "m-zhang");
}

// === Sorter Properties ===

#[test]
fn test_pinned_beats_recent_year() {
    let sorted = sort_for_profile(vec![
        record("recent", None, Some(2023)),
        record("pinned", Some(2), None),
    ]);
    assert_eq!(sorted[0].id(), "pinned");
}

fn record_strategy() -> impl Strategy<Value = (Option<i32>, Option<i32>)> {
    (
        prop::option::of(-3i32..6),
        prop::option::of(2000i32..2026),
    )
}

proptest! {
    #[test]
    fn test_sort_is_idempotent(keys in prop::collection::vec(record_strategy(), 0..12)) {
        let records: Vec<_> = keys
            .iter()
            .enumerate()
            .map(|(i, (order, year))| record(&format!("p{}", i), *order, *year))
            .collect();

        let once = sort_for_profile(records);
        let twice = sort_for_profile(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_unpinned_always_after_pinned(keys in prop::collection::vec(record_strategy(), 0..12)) {
        let records: Vec<_> = keys
            .iter()
            .enumerate()
            .map(|(i, (order, year))| record(&format!("p{}", i), *order, *year))
            .collect();

        let sorted = sort_for_profile(records);
        let first_unpinned = sorted
            .iter()
            .position(|r| r.profile_display_order.is_none())
            .unwrap_or(sorted.len());
        prop_assert!(sorted[first_unpinned..].iter().all(|r| r.profile_display_order.is_none()));
    }

    #[test]
    fn test_ties_ordered_newest_first(keys in prop::collection::vec(record_strategy(), 0..12)) {
        let records: Vec<_> = keys
            .iter()
            .enumerate()
            .map(|(i, (order, year))| record(&format!("p{}", i), *order, *year))
            .collect();

        let sorted = sort_for_profile(records);
        for pair in sorted.windows(2) {
            if pair[0].profile_display_order == pair[1].profile_display_order {
                prop_assert!(pair[0].year().unwrap_or(0) >= pair[1].year().unwrap_or(0));
            }
        }
    }
}
