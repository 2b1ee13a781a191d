//! Derived display records handed to the page renderer

use serde::{Deserialize, Serialize};

use crate::member::MemberId;
use crate::publication::Publication;

/// One byline entry, either linked to a member or plain text.
///
/// `citation_position` is the 0-based fragment index in the citation string,
/// or the link's `author_order` when the byline was built from links alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayAuthor {
    Internal {
        member_id: MemberId,
        name_en: String,
        name_zh: Option<String>,
        citation_position: u32,
        is_corresponding: bool,
    },
    External {
        text: String,
        citation_position: u32,
    },
}

impl DisplayAuthor {
    pub fn citation_position(&self) -> u32 {
        match self {
            DisplayAuthor::Internal {
                citation_position, ..
            }
            | DisplayAuthor::External {
                citation_position, ..
            } => *citation_position,
        }
    }

    pub fn member_id(&self) -> Option<&str> {
        match self {
            DisplayAuthor::Internal { member_id, .. } => Some(member_id),
            DisplayAuthor::External { .. } => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, DisplayAuthor::Internal { .. })
    }

    /// Text to render for this entry
    pub fn label(&self) -> &str {
        match self {
            DisplayAuthor::Internal { name_en, .. } => name_en,
            DisplayAuthor::External { text, .. } => text,
        }
    }
}

/// A publication with its reconciled byline and profile-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationDisplayRecord {
    #[serde(flatten)]
    pub publication: Publication,
    pub display_authors: Vec<DisplayAuthor>,
    pub is_featured: bool,
    pub profile_display_order: Option<i32>,
}

impl PublicationDisplayRecord {
    pub fn new(publication: Publication, display_authors: Vec<DisplayAuthor>) -> Self {
        Self {
            publication,
            display_authors,
            is_featured: false,
            profile_display_order: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.publication.id
    }

    pub fn year(&self) -> Option<i32> {
        self.publication.year
    }

    /// Member ids of the internal authors, in byline order
    pub fn internal_member_ids(&self) -> Vec<&str> {
        self.display_authors
            .iter()
            .filter_map(DisplayAuthor::member_id)
            .collect()
    }

    /// Byline as plain text, e.g. for an export or a tooltip
    pub fn byline(&self) -> String {
        self.display_authors
            .iter()
            .map(DisplayAuthor::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
