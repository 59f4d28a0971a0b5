//! Lookup result types
//!
//! A successful lookup yields either a list of definitions with ranked synonyms
//! and antonyms, or an ordered list of spelling suggestions.

use std::fmt;

/// Closeness of a related word to the search term, 0-100
///
/// Always non-negative; the payload's sign is not meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Similarity(u32);

impl Similarity {
    /// Create a similarity from a raw (possibly negative) payload value
    ///
    /// # Examples
    /// ```
    /// use thesaurus::core::Similarity;
    ///
    /// assert_eq!(Similarity::from_raw(-80), Similarity::from_raw(80));
    /// assert_eq!(Similarity::from_raw(-80).value(), 80);
    /// ```
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        Self(u32::try_from(raw.unsigned_abs()).unwrap_or(u32::MAX))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word related to the search term together with its similarity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedWord {
    pub word: String,
    pub similarity: Similarity,
}

impl RelatedWord {
    #[must_use]
    pub fn new(word: impl Into<String>, similarity: Similarity) -> Self {
        Self {
            word: word.into(),
            similarity,
        }
    }
}

/// One sense of the search term
///
/// Synonyms and antonyms keep the order the site returned them in, which is
/// most relevant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub part_of_speech: String,
    pub short_definition: String,
    pub synonyms: Vec<RelatedWord>,
    pub antonyms: Vec<RelatedWord>,
}

/// Outcome of a lookup that reached the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The term exists; one entry per part of speech and sense
    Found(Vec<Definition>),
    /// The term is unknown; suggestions ordered most relevant first
    NotFound(Vec<String>),
}

impl LookupResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_sign_is_dropped() {
        assert_eq!(Similarity::from_raw(-80).value(), 80);
        assert_eq!(Similarity::from_raw(80).value(), 80);
        assert_eq!(Similarity::from_raw(0).value(), 0);
    }

    #[test]
    fn similarity_saturates() {
        assert_eq!(Similarity::from_raw(i64::MIN).value(), u32::MAX);
    }

    #[test]
    fn similarity_display() {
        assert_eq!(format!("{}", Similarity::from_raw(-10)), "10");
    }

    #[test]
    fn lookup_result_found_flag() {
        assert!(LookupResult::Found(Vec::new()).is_found());
        assert!(!LookupResult::NotFound(vec!["happy".to_string()]).is_found());
    }
}
