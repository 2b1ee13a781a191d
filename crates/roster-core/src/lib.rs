//! Author reconciliation and publication display ordering for member profiles
//!
//! Each publication carries a free-text citation string and a set of
//! structured links to internal members. This crate reconciles the two into
//! an ordered byline of internal and external authors, then orders a
//! member's publications for their profile page:
//! - `normalize`: comparable forms of raw author names
//! - `matcher`: fragment-to-member matching behind the `AuthorMatcher` trait
//! - `assembler`: citation-ordered bylines, with a links-only fallback
//! - `sorter`: pinned-first, newest-next profile ordering
//! - `profile`: the whole pipeline for one profile request
//!
//! Everything here is pure and synchronous; derived records are recomputed
//! on every request and never stored.

pub mod assembler;
pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod profile;
pub mod sorter;

pub use assembler::{assemble, split_citation_string, Assembly, AuthorAssembler, AuthorSource};
pub use config::{MatchingConfig, QualityConfig, RosterConfig};
pub use error::{ConfigError, Result, RosterError};
pub use matcher::{match_candidate, AuthorMatcher, InternalCandidate, SubstringMatcher};
pub use normalize::{
    normalize, reformat_external, DefaultNormalizer, NameNormalizer, NormalizedName,
};
pub use profile::{build_profile, ProfileBuilder, ProfileInput, ProfilePublications};
pub use sorter::{compare_for_profile, featured_publications, sort_for_profile};

pub use roster_domain;
