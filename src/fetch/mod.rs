//! Page fetching
//!
//! A `PageSource` turns a URL into a `Page`. The production source is a blocking
//! HTTP client; tests substitute an in-memory one.

mod http;

pub use http::HttpPageSource;

use std::fmt;
use url::Url;

/// Which branch of the lookup a fetched page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// HTTP 200: the page carries definitions
    Found,
    /// HTTP 404: the page carries spelling suggestions
    NotFound,
}

impl PageStatus {
    /// Classify an HTTP status code
    ///
    /// Returns `None` for anything other than 200 or 404.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            200 => Some(Self::Found),
            404 => Some(Self::NotFound),
            _ => None,
        }
    }
}

/// A fetched HTML page
#[derive(Debug, Clone)]
pub struct Page {
    pub status: PageStatus,
    pub body: String,
}

/// Error type for failed fetches
#[derive(Debug)]
pub enum FetchError {
    /// The site answered with a status other than 200 or 404
    Status(u16),
    /// DNS, connection, TLS or body read failure
    Transport(attohttpc::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "Unexpected HTTP status {code}"),
            Self::Transport(e) => write!(f, "Request failed: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Status(_) => None,
            Self::Transport(e) => Some(e),
        }
    }
}

/// Anything that can fetch a page for a URL
pub trait PageSource {
    /// Fetch `url` once, without retrying
    ///
    /// # Errors
    /// Returns `FetchError` on transport failure or an unexpected status.
    fn fetch(&self, url: &Url) -> Result<Page, FetchError>;
}
