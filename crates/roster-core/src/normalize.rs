//! Author name normalization
//!
//! Citation strings mix "Family, Given" and "Given, Family" conventions and
//! the convention is not known per source, so a single-comma name yields
//! both orders as candidate forms. No locale-aware folding is attempted;
//! CJK text only gets trimmed.

/// Comparable forms of one raw author name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Input with surrounding whitespace removed, case untouched
    pub trimmed: String,
    /// Trimmed and lowercased
    pub primary: String,
    /// `"{part2} {part1}"` then `"{part1} {part2}"`, lowercased; empty unless
    /// the input has exactly one comma with two non-empty sides
    pub permutations: Vec<String>,
}

impl NormalizedName {
    /// An empty name can never match anything
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Primary form followed by the permuted forms
    pub fn english_forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.permutations.iter().map(String::as_str))
    }
}

/// Turns raw names into comparable forms.
pub trait NameNormalizer: Send + Sync {
    /// Normalize a citation fragment
    fn normalize(&self, raw: &str) -> NormalizedName;

    /// Canonical form of a member's English name
    fn normalize_member_name(&self, name_en: &str) -> String {
        name_en.trim().to_lowercase()
    }

    /// Canonical form of a member's Chinese name
    fn normalize_member_name_zh(&self, name_zh: &str) -> String {
        name_zh.trim().to_string()
    }
}

/// Trim, lowercase, and comma permutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer;

impl NameNormalizer for DefaultNormalizer {
    fn normalize(&self, raw: &str) -> NormalizedName {
        normalize(raw)
    }
}

/// Normalize a raw author name with the default rules.
pub fn normalize(raw: &str) -> NormalizedName {
    let trimmed = raw.trim();
    let primary = trimmed.to_lowercase();

    let permutations = match split_single_comma(trimmed) {
        Some((first, second)) => {
            let first = first.to_lowercase();
            let second = second.to_lowercase();
            vec![
                format!("{} {}", second, first),
                format!("{} {}", first, second),
            ]
        }
        None => Vec::new(),
    };

    NormalizedName {
        trimmed: trimmed.to_string(),
        primary,
        permutations,
    }
}

/// Render an unmatched fragment for display.
///
/// "Smith, John" becomes "Smith John": the comma is dropped but the order is
/// kept, since no member identity confirms which side is the family name.
/// Anything without exactly one comma is returned as-is.
pub fn reformat_external(fragment: &str) -> String {
    match split_single_comma(fragment) {
        Some((first, second)) => format!("{} {}", first, second),
        None => fragment.to_string(),
    }
}

/// Split on the only comma, if there is exactly one and both sides are non-empty.
fn split_single_comma(input: &str) -> Option<(&str, &str)> {
    let mut parts = input.split(',');
    let first = parts.next()?.trim();
    let second = parts.next()?.trim();
    if parts.next().is_some() || first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}
