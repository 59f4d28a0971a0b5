//! Word lookup command
//!
//! Sanitizes a search phrase, fetches its thesaurus page and extracts the
//! definitions or suggestions it carries.

use crate::core::{LookupResult, Query, QueryError};
use crate::extract::{ExtractError, PayloadLocator, ShapeError, build_result, extract_payload};
use crate::fetch::{FetchError, PageSource};
use log::{debug, info};
use std::fmt;
use url::Url;

/// The configured base URL cannot be used to build lookup URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlError {
    Parse(url::ParseError),
    /// URLs like `mailto:` or `data:` have no path to append the term to
    NotABase(String),
}

impl fmt::Display for BaseUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Invalid base URL: {e}"),
            Self::NotABase(url) => write!(f, "Base URL {url} cannot take a path"),
        }
    }
}

impl std::error::Error for BaseUrlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::NotABase(_) => None,
        }
    }
}

/// Configuration for looking up a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    base_url: Url,
}

impl LookupConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.thesaurus.com/browse/";

    /// Create a configuration whose lookups live under `base_url`
    ///
    /// # Errors
    ///
    /// Returns `BaseUrlError` if `base_url` does not parse or cannot have path
    /// segments appended.
    pub fn new(base_url: &str) -> Result<Self, BaseUrlError> {
        let base_url = Url::parse(base_url).map_err(BaseUrlError::Parse)?;
        if base_url.cannot_be_a_base() {
            return Err(BaseUrlError::NotABase(base_url.into()));
        }
        Ok(Self { base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the lookup URL for a query
    ///
    /// The term becomes one percent-encoded path segment.
    ///
    /// # Examples
    /// ```
    /// use thesaurus::commands::LookupConfig;
    /// use thesaurus::core::Query;
    ///
    /// let query = Query::parse("ice cream").unwrap();
    /// let url = LookupConfig::default().url_for(&query);
    /// assert_eq!(url.as_str(), "https://www.thesaurus.com/browse/ice%20cream");
    /// ```
    #[must_use]
    pub fn url_for(&self, query: &Query) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects bases that cannot take path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query.term());
        }
        url
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

/// A completed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub query: Query,
    pub result: LookupResult,
}

/// Error type for failed lookups
#[derive(Debug)]
pub enum LookupError {
    /// The search phrase contains characters that are not allowed
    InvalidInput(QueryError),
    /// The site could not be reached or answered with an unexpected status
    Connection(FetchError),
    /// The page did not contain a readable payload
    Parse(ExtractError),
    /// The payload parsed but its structure was not recognized
    UnexpectedShape(ShapeError),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "{e}"),
            Self::Connection(e) => write!(f, "Failed to access thesaurus.com: {e}"),
            Self::Parse(e) => write!(f, "Failed to read the thesaurus.com page: {e}"),
            Self::UnexpectedShape(e) => {
                write!(f, "{e} (the site format may have changed)")
            }
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Connection(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::UnexpectedShape(e) => Some(e),
        }
    }
}

impl From<QueryError> for LookupError {
    fn from(e: QueryError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<FetchError> for LookupError {
    fn from(e: FetchError) -> Self {
        Self::Connection(e)
    }
}

impl From<ExtractError> for LookupError {
    fn from(e: ExtractError) -> Self {
        Self::Parse(e)
    }
}

impl From<ShapeError> for LookupError {
    fn from(e: ShapeError) -> Self {
        Self::UnexpectedShape(e)
    }
}

/// Look up a raw search phrase
///
/// The phrase is sanitized before anything is fetched, so a rejected phrase
/// never reaches `source`.
///
/// # Errors
///
/// Returns an error if:
/// - The phrase contains disallowed characters or is empty
/// - The page cannot be fetched or has an unexpected status
/// - The embedded payload is missing or not valid JSON
/// - The payload does not have the expected structure
pub fn run_lookup<S, L>(
    raw: &str,
    source: &S,
    locator: &L,
    config: &LookupConfig,
) -> Result<Lookup, LookupError>
where
    S: PageSource + ?Sized,
    L: PayloadLocator + ?Sized,
{
    let query = Query::parse(raw)?;
    lookup_query(query, source, locator, config)
}

/// Look up an already sanitized query
///
/// # Errors
///
/// Same as [`run_lookup`], minus input validation.
pub fn lookup_query<S, L>(
    query: Query,
    source: &S,
    locator: &L,
    config: &LookupConfig,
) -> Result<Lookup, LookupError>
where
    S: PageSource + ?Sized,
    L: PayloadLocator + ?Sized,
{
    let url = config.url_for(&query);
    info!("Looking up '{}'", query.term());

    let page = source.fetch(&url)?;
    debug!("Page status {:?}", page.status);

    let payload = extract_payload(&page.body, locator)?;
    let result = build_result(payload, page.status)?;

    match &result {
        LookupResult::Found(definitions) => info!("Found {} definitions", definitions.len()),
        LookupResult::NotFound(suggestions) => {
            info!("Not found, {} suggestions", suggestions.len());
        }
    }

    Ok(Lookup { query, result })
}
