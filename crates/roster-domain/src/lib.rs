//! Research-group domain types shared by the profile engine and its collaborators
//!
//! This crate provides the canonical records the persistence layer hands over
//! and the derived records the renderer consumes:
//! - Member: an internal person with English and optional Chinese name
//! - Publication: a paper with its free-text citation string
//! - AuthorshipLink: the structured member-to-publication relation
//! - DisplayAuthor, PublicationDisplayRecord: derived, never persisted
//! - DataQualityIssue: operator-facing warnings raised while deriving

pub mod authorship;
pub mod display;
pub mod member;
pub mod publication;
pub mod quality;

pub use authorship::*;
pub use display::*;
pub use member::*;
pub use publication::*;
pub use quality::*;
