//! Matching citation fragments against a publication's linked members
//!
//! The default matcher favors recall: a member shown as plain text on their
//! own profile is a visible defect, an occasional mismatch is not. It can
//! confuse a short name with a longer one containing it ("Li" in "Li Wang").
//! When several candidates match, the first in the supplied order wins.

use roster_domain::{LinkedAuthor, MemberId};

use crate::config::MatchingConfig;
use crate::normalize::{DefaultNormalizer, NameNormalizer, NormalizedName};

/// A linked member a fragment may resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalCandidate {
    pub member_id: MemberId,
    pub name_en: String,
    pub name_zh: Option<String>,
    pub is_corresponding: bool,
    pub author_order: u32,
}

impl From<&LinkedAuthor> for InternalCandidate {
    fn from(linked: &LinkedAuthor) -> Self {
        Self {
            member_id: linked.member.id.clone(),
            name_en: linked.member.name_en.clone(),
            name_zh: linked.member.name_zh.clone(),
            is_corresponding: linked.link.is_corresponding,
            author_order: linked.link.author_order,
        }
    }
}

/// Decides whether a fragment identifies one of the candidates.
pub trait AuthorMatcher: Send + Sync {
    /// Normalize a raw fragment the way `find_match` expects it
    fn normalize(&self, raw: &str) -> NormalizedName;

    /// Index of the matching candidate, if any
    fn find_match(
        &self,
        fragment: &NormalizedName,
        candidates: &[InternalCandidate],
    ) -> Option<usize>;

    /// Normalize `fragment` and return the matching candidate
    fn match_fragment<'a>(
        &self,
        fragment: &str,
        candidates: &'a [InternalCandidate],
    ) -> Option<&'a InternalCandidate> {
        let name = self.normalize(fragment);
        self.find_match(&name, candidates).and_then(|index| candidates.get(index))
    }
}

/// Equality-or-containment matcher over English and Chinese names.
#[derive(Debug, Clone, Default)]
pub struct SubstringMatcher<N: NameNormalizer = DefaultNormalizer> {
    normalizer: N,
    config: MatchingConfig,
}

impl SubstringMatcher<DefaultNormalizer> {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            normalizer: DefaultNormalizer,
            config,
        }
    }
}

impl<N: NameNormalizer> SubstringMatcher<N> {
    /// Use a different normalizer, e.g. a locale-aware one
    pub fn with_normalizer(normalizer: N, config: MatchingConfig) -> Self {
        Self { normalizer, config }
    }

    fn is_match(&self, fragment: &NormalizedName, candidate: &InternalCandidate) -> bool {
        let name_en = self.normalizer.normalize_member_name(&candidate.name_en);
        if fragment
            .english_forms()
            .any(|form| self.names_overlap(form, &name_en))
        {
            return true;
        }

        if !self.config.match_chinese_name {
            return false;
        }
        match &candidate.name_zh {
            Some(zh) => {
                let name_zh = self.normalizer.normalize_member_name_zh(zh);
                self.names_overlap(&fragment.trimmed, &name_zh)
            }
            None => false,
        }
    }

    fn names_overlap(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a == b {
            return true;
        }
        if !self.config.allow_substring {
            return false;
        }

        let (short, long) = if a.chars().count() <= b.chars().count() {
            (a, b)
        } else {
            (b, a)
        };
        short.chars().count() >= self.config.min_substring_len && long.contains(short)
    }
}

impl<N: NameNormalizer> AuthorMatcher for SubstringMatcher<N> {
    fn normalize(&self, raw: &str) -> NormalizedName {
        self.normalizer.normalize(raw)
    }

    fn find_match(
        &self,
        fragment: &NormalizedName,
        candidates: &[InternalCandidate],
    ) -> Option<usize> {
        if fragment.is_empty() {
            return None;
        }
        candidates
            .iter()
            .position(|candidate| self.is_match(fragment, candidate))
    }
}

/// Match one fragment with the default rules.
pub fn match_candidate<'a>(
    fragment: &str,
    candidates: &'a [InternalCandidate],
) -> Option<&'a InternalCandidate> {
    SubstringMatcher::new(MatchingConfig::default()).match_fragment(fragment, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidate(id: &str, name_en: &str, name_zh: Option<&str>) -> InternalCandidate {
        InternalCandidate {
            member_id: id.to_string(),
            name_en: name_en.to_string(),
            name_zh: name_zh.map(str::to_string),
            is_corresponding: false,
            author_order: 0,
        }
    }

    #[rstest]
    #[case("Smith, John")]
    #[case("John Smith")]
    #[case("john smith")]
    #[case("Smith")]
    #[case("John Smith (UCL)")]
    fn test_matches_john_smith(#[case] fragment: &str) {
        let candidates = vec![candidate("m1", "John Smith", None)];
        let found = match_candidate(fragment, &candidates);
        assert_eq!(found.map(|c| c.member_id.as_str()), Some("m1"));
    }

    #[test]
    fn test_no_match_is_none() {
        let candidates = vec![candidate("m1", "John Smith", None)];
        assert!(match_candidate("J. Lee", &candidates).is_none());
    }

    #[test]
    fn test_chinese_name_match() {
        let candidates = vec![candidate("m1", "Wei Zhang", Some("张伟"))];
        assert!(match_candidate("张伟", &candidates).is_some());
        assert!(match_candidate(" 张伟* ", &candidates).is_some());
    }

    #[test]
    fn test_chinese_name_disabled() {
        let config = MatchingConfig {
            match_chinese_name: false,
            ..Default::default()
        };
        let matcher = SubstringMatcher::new(config);
        let candidates = vec![candidate("m1", "Wei Zhang", Some("张伟"))];
        assert!(matcher.match_fragment("张伟", &candidates).is_none());
    }

    #[test]
    fn test_empty_fragment_never_matches() {
        let candidates = vec![candidate("m1", "John Smith", None)];
        assert!(match_candidate("   ", &candidates).is_none());
    }

    #[test]
    fn test_empty_candidate_name_never_matches() {
        let candidates = vec![candidate("m1", "  ", Some(""))];
        assert!(match_candidate("John Smith", &candidates).is_none());
    }

    #[test]
    fn test_first_candidate_wins() {
        let candidates = vec![
            candidate("m1", "Li Wang", None),
            candidate("m2", "Li", None),
        ];
        let found = match_candidate("Li", &candidates);
        assert_eq!(found.map(|c| c.member_id.as_str()), Some("m1"));
    }

    #[test]
    fn test_equality_only() {
        let config = MatchingConfig {
            allow_substring: false,
            ..Default::default()
        };
        let matcher = SubstringMatcher::new(config);
        let candidates = vec![candidate("m1", "John Smith", None)];
        assert!(matcher.match_fragment("Smith", &candidates).is_none());
        assert!(matcher.match_fragment("Smith, John", &candidates).is_some());
    }

    #[test]
    fn test_min_substring_len() {
        let config = MatchingConfig {
            min_substring_len: 4,
            ..Default::default()
        };
        let matcher = SubstringMatcher::new(config);
        let candidates = vec![candidate("m1", "Li Wang", None)];
        assert!(matcher.match_fragment("Li", &candidates).is_none());
        assert!(matcher.match_fragment("Wang", &candidates).is_some());
    }
}
