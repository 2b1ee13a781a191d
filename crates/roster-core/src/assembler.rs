//! Byline assembly from the citation string and the authorship links
//!
//! The citation string is authoritative for order and for authors with no
//! member record. Links supply identity. Each member can be claimed by at
//! most one fragment per publication, even if it is linked more than once.

use std::collections::HashSet;

use roster_domain::{DisplayAuthor, LinkedAuthor, Publication};

use crate::config::MatchingConfig;
use crate::matcher::{AuthorMatcher, InternalCandidate, SubstringMatcher};
use crate::normalize::reformat_external;

/// Where a byline came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSource {
    /// Built from the citation string, links used for identity
    CitationString,
    /// No usable citation string; built from links alone
    RelationFallback,
}

/// A byline plus what the caller needs to report on its quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub authors: Vec<DisplayAuthor>,
    pub source: AuthorSource,
    /// Linked members no fragment claimed (always empty on the fallback path)
    pub unmatched_links: Vec<InternalCandidate>,
}

impl Assembly {
    pub fn is_degraded(&self) -> bool {
        self.source == AuthorSource::RelationFallback
    }
}

/// Split a citation string into trimmed, non-empty fragments.
pub fn split_citation_string(citation: &str) -> Vec<&str> {
    citation
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Builds bylines with a pluggable matcher.
#[derive(Debug, Clone, Default)]
pub struct AuthorAssembler<M: AuthorMatcher = SubstringMatcher> {
    matcher: M,
}

impl AuthorAssembler<SubstringMatcher> {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            matcher: SubstringMatcher::new(config),
        }
    }
}

impl<M: AuthorMatcher> AuthorAssembler<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// Display authors for one publication, in citation order
    pub fn assemble(
        &self,
        publication: &Publication,
        linked: &[LinkedAuthor],
    ) -> Vec<DisplayAuthor> {
        self.assemble_detailed(publication, linked).authors
    }

    /// Display authors plus provenance and unclaimed links
    pub fn assemble_detailed(
        &self,
        publication: &Publication,
        linked: &[LinkedAuthor],
    ) -> Assembly {
        let fragments = publication
            .citation_string()
            .map(split_citation_string)
            .unwrap_or_default();

        if fragments.is_empty() {
            return Assembly {
                authors: from_links(linked),
                source: AuthorSource::RelationFallback,
                unmatched_links: Vec::new(),
            };
        }

        let mut pool = candidate_pool(linked);
        let mut authors = Vec::with_capacity(fragments.len());

        for (position, fragment) in fragments.into_iter().enumerate() {
            let citation_position = position as u32;
            let name = self.matcher.normalize(fragment);

            match self.matcher.find_match(&name, &pool) {
                Some(index) => {
                    let candidate = pool.remove(index);
                    tracing::debug!(
                        publication = %publication.id,
                        fragment,
                        member = %candidate.member_id,
                        "Fragment matched linked member"
                    );
                    authors.push(DisplayAuthor::Internal {
                        member_id: candidate.member_id,
                        name_en: candidate.name_en,
                        name_zh: candidate.name_zh,
                        citation_position,
                        is_corresponding: candidate.is_corresponding,
                    });
                }
                None => {
                    tracing::debug!(
                        publication = %publication.id,
                        fragment,
                        "Fragment kept as external author"
                    );
                    authors.push(DisplayAuthor::External {
                        text: reformat_external(fragment),
                        citation_position,
                    });
                }
            }
        }

        Assembly {
            authors,
            source: AuthorSource::CitationString,
            unmatched_links: pool,
        }
    }
}

/// Assemble a byline with the default matcher.
pub fn assemble(publication: &Publication, linked: &[LinkedAuthor]) -> Vec<DisplayAuthor> {
    AuthorAssembler::new(MatchingConfig::default()).assemble(publication, linked)
}

/// One candidate per distinct member, first link wins.
fn candidate_pool(linked: &[LinkedAuthor]) -> Vec<InternalCandidate> {
    let mut seen = HashSet::new();
    linked
        .iter()
        .filter(|l| seen.insert(l.member.id.clone()))
        .map(InternalCandidate::from)
        .collect()
}

/// One internal entry per distinct member, ordered by `author_order`.
fn from_links(linked: &[LinkedAuthor]) -> Vec<DisplayAuthor> {
    let mut ordered: Vec<&LinkedAuthor> = linked.iter().collect();
    ordered.sort_by_key(|l| l.link.author_order);

    let mut seen = HashSet::new();
    ordered
        .into_iter()
        .filter(|l| seen.insert(l.member.id.clone()))
        .map(|l| DisplayAuthor::Internal {
            member_id: l.member.id.clone(),
            name_en: l.member.name_en.clone(),
            name_zh: l.member.name_zh.clone(),
            citation_position: l.link.author_order,
            is_corresponding: l.link.is_corresponding,
        })
        .collect()
}
