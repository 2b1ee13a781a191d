//! Data-quality issues raised while deriving profile records

use serde::{Deserialize, Serialize};

/// Severity of a data-quality issue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

/// What went wrong, for operators filtering a backlog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// No citation string; byline built from linked members only
    MissingCitationString,
    /// A linked member never matched any citation fragment
    LinkNotInCitation,
    /// A link points at a member record that was not supplied
    UnknownMember,
}

/// A data-quality issue attached to one publication
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityIssue {
    pub publication_id: String,
    pub field: String,
    pub message: String,
    pub severity: IssueSeverity,
    pub kind: IssueKind,
}

impl DataQualityIssue {
    pub fn missing_citation_string(publication_id: &str) -> Self {
        Self {
            publication_id: publication_id.to_string(),
            field: "authors_full_string".to_string(),
            message: "Citation string is missing; byline shows linked members only".to_string(),
            severity: IssueSeverity::Warning,
            kind: IssueKind::MissingCitationString,
        }
    }

    pub fn link_not_in_citation(publication_id: &str, member_id: &str) -> Self {
        Self {
            publication_id: publication_id.to_string(),
            field: "authors_full_string".to_string(),
            message: format!("Linked member {} does not appear in the citation string", member_id),
            severity: IssueSeverity::Info,
            kind: IssueKind::LinkNotInCitation,
        }
    }

    pub fn unknown_member(publication_id: &str, member_id: &str) -> Self {
        Self {
            publication_id: publication_id.to_string(),
            field: "member_id".to_string(),
            message: format!("Authorship link references unknown member {}", member_id),
            severity: IssueSeverity::Error,
            kind: IssueKind::UnknownMember,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, IssueSeverity::Error)
    }
}
