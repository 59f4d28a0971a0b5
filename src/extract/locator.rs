//! Locating the embedded payload inside a page
//!
//! The site ships its state as a JavaScript assignment inside a `<script>` tag.
//! Where exactly it sits changes whenever the site is redesigned, so the anchor
//! logic lives behind `PayloadLocator` and nothing else depends on it.

/// Prefix of the script that carries the page state
pub const INITIAL_STATE_MARKER: &str = "window.INITIAL_STATE =";

/// Finds the raw payload text in an HTML page
pub trait PayloadLocator {
    /// Return the payload text, or `None` if the anchor is missing
    fn locate<'a>(&self, html: &'a str) -> Option<&'a str>;
}

/// Locates the payload between a marker prefix and a terminator
///
/// The payload starts right after the first occurrence of `prefix` and ends
/// at the next `terminator`. Surrounding whitespace and a trailing `;` are
/// stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptMarkerLocator {
    prefix: &'static str,
    terminator: &'static str,
}

impl ScriptMarkerLocator {
    #[must_use]
    pub const fn new(prefix: &'static str, terminator: &'static str) -> Self {
        Self { prefix, terminator }
    }
}

impl Default for ScriptMarkerLocator {
    fn default() -> Self {
        Self::new(INITIAL_STATE_MARKER, "</script>")
    }
}

impl PayloadLocator for ScriptMarkerLocator {
    fn locate<'a>(&self, html: &'a str) -> Option<&'a str> {
        let start = html.find(self.prefix)? + self.prefix.len();
        let rest = &html[start..];
        let end = rest.find(self.terminator)?;

        let body = rest[..end].trim();
        let body = body.strip_suffix(';').map_or(body, str::trim_end);

        (!body.is_empty()).then_some(body)
    }
}
