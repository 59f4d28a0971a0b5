//! Search query sanitization
//!
//! A Query is the cleaned-up phrase typed on the command line. Turning it into
//! a URL is left to the lookup configuration.

use std::fmt;

/// A validated search phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    term: String,
}

/// Error type for rejected search phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Empty,
    IllegalCharacter(char),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Search term is empty"),
            Self::IllegalCharacter(c) => {
                write!(f, "Illegal character {c:?} found in search term")
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl Query {
    /// Sanitize a raw search phrase
    ///
    /// Only alphanumeric characters, whitespace and hyphens are accepted.
    /// Runs of whitespace collapse to a single space.
    ///
    /// # Errors
    /// Returns `QueryError` if:
    /// - The phrase is empty or only whitespace
    /// - Any character is not alphanumeric, whitespace or `-`
    ///
    /// # Examples
    /// ```
    /// use thesaurus::core::Query;
    ///
    /// let query = Query::parse("ice  cream").unwrap();
    /// assert_eq!(query.term(), "ice cream");
    ///
    /// assert!(Query::parse("!!!").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if let Some(c) = raw
            .chars()
            .find(|&c| !(c.is_alphanumeric() || c.is_whitespace() || c == '-'))
        {
            return Err(QueryError::IllegalCharacter(c));
        }

        let term = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if term.is_empty() {
            return Err(QueryError::Empty);
        }

        Ok(Self { term })
    }

    /// The phrase as typed, with whitespace normalized
    #[inline]
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_passes_through() {
        let query = Query::parse("happy").unwrap();
        assert_eq!(query.term(), "happy");
    }

    #[test]
    fn whitespace_runs_collapse() {
        let query = Query::parse("  over \t the   top ").unwrap();
        assert_eq!(query.term(), "over the top");
    }

    #[test]
    fn hyphens_and_digits_allowed() {
        let query = Query::parse("well-being 24").unwrap();
        assert_eq!(query.term(), "well-being 24");
    }

    #[test]
    fn non_ascii_letters_allowed() {
        let query = Query::parse("café").unwrap();
        assert_eq!(query.term(), "café");
    }

    #[test]
    fn punctuation_is_rejected() {
        assert_eq!(
            Query::parse("!!!"),
            Err(QueryError::IllegalCharacter('!'))
        );
        assert!(matches!(
            Query::parse("rock&roll"),
            Err(QueryError::IllegalCharacter('&'))
        ));
        assert!(Query::parse("a/b").is_err());
        assert!(Query::parse("don't").is_err());
        assert!(Query::parse("50%").is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Query::parse(""), Err(QueryError::Empty));
        assert_eq!(Query::parse("   "), Err(QueryError::Empty));
    }

    #[test]
    fn query_display() {
        let query = Query::parse("ice cream").unwrap();
        assert_eq!(format!("{query}"), "ice cream");
    }
}
