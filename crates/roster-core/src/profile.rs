//! Profile assembly: from persisted records to an ordered publication list
//!
//! The collaborator hands over everything one profile needs in a single
//! [`ProfileInput`]: the profile member, every member referenced by a link,
//! the publications, and the full link set of each publication (all
//! co-authors, not just the profile owner).

use std::collections::{HashMap, HashSet};
use std::path::Path;

use roster_domain::{
    AuthorshipLink, DataQualityIssue, LinkedAuthor, Member, Publication, PublicationDisplayRecord,
};
use serde::{Deserialize, Serialize};

use crate::assembler::AuthorAssembler;
use crate::config::{QualityConfig, RosterConfig};
use crate::error::{Result, RosterError};
use crate::matcher::{AuthorMatcher, SubstringMatcher};
use crate::sorter::{featured_publications, sort_for_profile};

/// Records for one profile request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Whose profile is being built
    pub member: Member,
    /// Members referenced by `links`; the profile member may be omitted
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub links: Vec<AuthorshipLink>,
}

impl ProfileInput {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            members: Vec::new(),
            publications: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Parse and sanity-check a JSON profile bundle
    pub fn from_json(json_str: &str) -> Result<Self> {
        let input: Self = serde_json::from_str(json_str)?;
        if input.member.id.trim().is_empty() {
            return Err(RosterError::InvalidInput(
                "profile member has an empty id".to_string(),
            ));
        }
        Ok(input)
    }

    /// Read a JSON profile bundle from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
}

/// Ordered display records for one profile, plus data-quality findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePublications {
    pub member_id: String,
    pub records: Vec<PublicationDisplayRecord>,
    pub issues: Vec<DataQualityIssue>,
}

impl ProfilePublications {
    /// Featured records, in display order
    pub fn featured(&self) -> Vec<&PublicationDisplayRecord> {
        featured_publications(&self.records)
    }
}

/// Builds profile publication lists with a configurable matcher.
pub struct ProfileBuilder<M: AuthorMatcher = SubstringMatcher> {
    assembler: AuthorAssembler<M>,
    quality: QualityConfig,
}

impl ProfileBuilder<SubstringMatcher> {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            assembler: AuthorAssembler::new(config.matching.clone()),
            quality: config.quality.clone(),
        }
    }
}

impl<M: AuthorMatcher> ProfileBuilder<M> {
    pub fn with_matcher(matcher: M, quality: QualityConfig) -> Self {
        Self {
            assembler: AuthorAssembler::with_matcher(matcher),
            quality,
        }
    }

    /// Reconcile every visible publication of the profile member and order them.
    pub fn build(&self, input: &ProfileInput) -> ProfilePublications {
        let owner_id = input.member.id.as_str();

        let mut members: HashMap<&str, &Member> = input
            .members
            .iter()
            .map(|m| (m.id.as_str(), m))
            .collect();
        members.entry(owner_id).or_insert(&input.member);

        let mut links_by_publication: HashMap<&str, Vec<&AuthorshipLink>> = HashMap::new();
        let mut seen_links: HashSet<(&str, &str)> = HashSet::new();
        for link in &input.links {
            if !seen_links.insert((link.publication_id.as_str(), link.member_id.as_str())) {
                tracing::debug!(
                    publication = %link.publication_id,
                    member = %link.member_id,
                    "Skipping duplicate authorship link"
                );
                continue;
            }
            links_by_publication
                .entry(link.publication_id.as_str())
                .or_default()
                .push(link);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut records = Vec::new();
        let mut issues = Vec::new();

        for publication in &input.publications {
            if !seen.insert(publication.id.as_str()) {
                tracing::debug!(publication = %publication.id, "Skipping duplicate publication");
                continue;
            }

            let links = links_by_publication
                .get(publication.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();

            let Some(owner_link) = links
                .iter()
                .find(|l| l.member_id == owner_id && l.publication_status.is_visible())
            else {
                tracing::debug!(
                    publication = %publication.id,
                    member = owner_id,
                    "Publication not published on this profile"
                );
                continue;
            };

            let mut linked = Vec::with_capacity(links.len());
            for link in links {
                match members.get(link.member_id.as_str()) {
                    Some(member) => {
                        linked.push(LinkedAuthor::new((*link).clone(), (*member).clone()))
                    }
                    None => {
                        tracing::warn!(
                            publication = %publication.id,
                            member = %link.member_id,
                            "Authorship link references unknown member"
                        );
                        issues.push(DataQualityIssue::unknown_member(
                            &publication.id,
                            &link.member_id,
                        ));
                    }
                }
            }

            let assembly = self.assembler.assemble_detailed(publication, &linked);

            if assembly.is_degraded() {
                tracing::warn!(
                    publication = %publication.id,
                    links = linked.len(),
                    "Citation string missing, byline built from linked members only"
                );
                if self.quality.report_missing_citation {
                    issues.push(DataQualityIssue::missing_citation_string(&publication.id));
                }
            }

            if self.quality.report_unlinked_members {
                issues.extend(assembly.unmatched_links.iter().map(|candidate| {
                    DataQualityIssue::link_not_in_citation(&publication.id, &candidate.member_id)
                }));
            }

            records.push(PublicationDisplayRecord {
                publication: publication.clone(),
                display_authors: assembly.authors,
                is_featured: owner_link.is_featured_on_profile,
                profile_display_order: owner_link.profile_display_order,
            });
        }

        let records = sort_for_profile(records);
        tracing::info!(
            member = owner_id,
            publications = records.len(),
            issues = issues.len(),
            "Built profile publication list"
        );

        ProfilePublications {
            member_id: owner_id.to_string(),
            records,
            issues,
        }
    }
}

/// Build a profile's publication list with the given configuration.
pub fn build_profile(input: &ProfileInput, config: &RosterConfig) -> ProfilePublications {
    ProfileBuilder::new(config).build(input)
}
