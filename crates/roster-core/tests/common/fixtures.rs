//! Test fixture loading and record builders

use std::path::PathBuf;

use roster_core::roster_domain::{
    AuthorshipLink, LinkedAuthor, Member, Publication, PublicationDisplayRecord,
};

/// Get the path to a fixture file
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// A member linked to publication `p1` at `author_order`
#[allow(dead_code)]
pub fn linked(member_id: &str, name_en: &str, author_order: u32) -> LinkedAuthor {
    LinkedAuthor::new(
        AuthorshipLink::new("p1", member_id, author_order),
        Member::new(name_en).with_id(member_id),
    )
}

/// Publication `p1` with the given citation string
#[allow(dead_code)]
pub fn publication(citation: Option<&str>) -> Publication {
    let publication = Publication::new("Test publication").with_id("p1");
    match citation {
        Some(citation) => publication.with_authors(citation),
        None => publication,
    }
}

/// A display record with only the sort keys filled in
#[allow(dead_code)]
pub fn record(id: &str, order: Option<i32>, year: Option<i32>) -> PublicationDisplayRecord {
    let mut publication = Publication::new(id).with_id(id);
    if let Some(year) = year {
        publication = publication.with_year(year);
    }
    let mut record = PublicationDisplayRecord::new(publication, Vec::new());
    record.profile_display_order = order;
    record
}
