//! Member representation

use serde::{Deserialize, Serialize};

/// Opaque, stable member identifier
pub type MemberId = String;

/// A research-group member
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name_en: String,
    #[serde(default)]
    pub name_zh: Option<String>,
}

impl Member {
    /// Create a new member with a generated id
    pub fn new(name_en: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name_en: name_en.into(),
            name_zh: None,
        }
    }

    /// Builder method to set an explicit id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method to add a Chinese name
    pub fn with_name_zh(mut self, name_zh: impl Into<String>) -> Self {
        self.name_zh = Some(name_zh.into());
        self
    }
}
