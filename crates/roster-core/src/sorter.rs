//! Profile ordering for publication display records
//!
//! Pinned records (explicit `profile_display_order`) come first, lowest rank
//! first. Everything else follows, newest first. Unknown years count as 0.

use std::cmp::Ordering;

use roster_domain::PublicationDisplayRecord;

/// Order records for a profile page. Stable, so equal keys keep input order.
pub fn sort_for_profile(
    mut records: Vec<PublicationDisplayRecord>,
) -> Vec<PublicationDisplayRecord> {
    records.sort_by(compare_for_profile);
    records
}

/// The comparison behind [`sort_for_profile`].
pub fn compare_for_profile(a: &PublicationDisplayRecord, b: &PublicationDisplayRecord) -> Ordering {
    compare_display_order(a.profile_display_order, b.profile_display_order)
        .then_with(|| b.year().unwrap_or(0).cmp(&a.year().unwrap_or(0)))
}

/// Records flagged as featured, keeping their relative order.
pub fn featured_publications(
    records: &[PublicationDisplayRecord],
) -> Vec<&PublicationDisplayRecord> {
    records.iter().filter(|r| r.is_featured).collect()
}

fn compare_display_order(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
