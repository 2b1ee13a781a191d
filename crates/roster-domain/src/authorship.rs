//! Structured authorship relation between members and publications

use serde::{Deserialize, Serialize};

use crate::member::{Member, MemberId};

/// Publication workflow state carried on each authorship link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    /// Visible on profiles
    #[default]
    Published,
    /// Under review at a venue
    Submitted,
    /// Work in progress, never shown
    Draft,
    /// Hidden from profiles but kept for records
    Archived,
}

impl PublicationStatus {
    /// Whether a publication in this state belongs on a profile page.
    pub fn is_visible(&self) -> bool {
        matches!(self, PublicationStatus::Published)
    }
}

/// One linked internal author of one publication.
///
/// `author_order` ranks known internal authors only; it is not a byline
/// position. `profile_display_order` is the curation rank on the linked
/// member's own profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipLink {
    pub publication_id: String,
    pub member_id: MemberId,
    #[serde(default)]
    pub author_order: u32,
    #[serde(default)]
    pub is_corresponding: bool,
    #[serde(default)]
    pub is_featured_on_profile: bool,
    #[serde(default)]
    pub profile_display_order: Option<i32>,
    #[serde(default)]
    pub publication_status: PublicationStatus,
}

impl AuthorshipLink {
    /// Create a published, non-featured link
    pub fn new(
        publication_id: impl Into<String>,
        member_id: impl Into<String>,
        author_order: u32,
    ) -> Self {
        Self {
            publication_id: publication_id.into(),
            member_id: member_id.into(),
            author_order,
            is_corresponding: false,
            is_featured_on_profile: false,
            profile_display_order: None,
            publication_status: PublicationStatus::Published,
        }
    }

    /// Builder method to mark the corresponding author
    pub fn corresponding(mut self) -> Self {
        self.is_corresponding = true;
        self
    }

    /// Builder method to feature the publication on this member's profile
    pub fn featured(mut self) -> Self {
        self.is_featured_on_profile = true;
        self
    }

    /// Builder method to pin the publication at a rank on this member's profile
    pub fn with_display_order(mut self, order: i32) -> Self {
        self.profile_display_order = Some(order);
        self
    }

    /// Builder method to set the workflow state
    pub fn with_status(mut self, status: PublicationStatus) -> Self {
        self.publication_status = status;
        self
    }
}

/// An authorship link joined with the member record it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAuthor {
    pub link: AuthorshipLink,
    pub member: Member,
}

impl LinkedAuthor {
    pub fn new(link: AuthorshipLink, member: Member) -> Self {
        Self { link, member }
    }
}
