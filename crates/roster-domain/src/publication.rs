//! Publication domain model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A publication attached to one or more member profiles
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Semicolon-separated free-text author list, in published byline order
    #[serde(default)]
    pub authors_full_string: Option<String>,

    // Pass-through metadata
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub abstract_text: Option<String>,

    // Additional fields (catch-all for collaborator-specific columns)
    #[serde(default)]
    pub extra_fields: HashMap<String, String>,
}

impl Publication {
    /// Create a new publication with a generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            year: None,
            authors_full_string: None,
            venue: None,
            url: None,
            pdf_url: None,
            doi: None,
            abstract_text: None,
            extra_fields: HashMap::new(),
        }
    }

    /// Builder method to set an explicit id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method to set the year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Builder method to set the citation string
    pub fn with_authors(mut self, authors_full_string: impl Into<String>) -> Self {
        self.authors_full_string = Some(authors_full_string.into());
        self
    }

    /// The citation string, if present and not blank
    pub fn citation_string(&self) -> Option<&str> {
        self.authors_full_string
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}
