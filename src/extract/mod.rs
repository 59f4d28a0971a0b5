//! Payload extraction
//!
//! Pulls the embedded JSON state out of a thesaurus page and turns it into a
//! `LookupResult`.

mod builder;
mod locator;
mod normalize;

pub use builder::{ShapeError, build_result};
pub use locator::{INITIAL_STATE_MARKER, PayloadLocator, ScriptMarkerLocator};
pub use normalize::normalize_undefined;

use log::debug;
use serde_json::Value;
use std::fmt;

/// Error type for pages whose payload could not be read
#[derive(Debug)]
pub enum ExtractError {
    /// The payload anchor was not found in the page
    MarkerNotFound,
    /// The payload is not valid JSON after normalization
    InvalidJson(serde_json::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkerNotFound => write!(f, "Could not find embedded data in the page"),
            Self::InvalidJson(e) => write!(f, "Embedded data is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MarkerNotFound => None,
            Self::InvalidJson(e) => Some(e),
        }
    }
}

/// Locate, normalize and parse the embedded payload of a page
///
/// # Errors
///
/// Returns an error if:
/// - `locator` cannot find the payload
/// - The payload is not valid JSON once `undefined` is replaced by `null`
pub fn extract_payload<L: PayloadLocator + ?Sized>(
    html: &str,
    locator: &L,
) -> Result<Value, ExtractError> {
    let raw = locator.locate(html).ok_or(ExtractError::MarkerNotFound)?;
    debug!("Located {} bytes of embedded payload", raw.len());

    serde_json::from_str(&normalize_undefined(raw)).map_err(ExtractError::InvalidJson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LookupResult, Similarity};
    use crate::fetch::PageStatus;

    const FOUND_PAGE: &str = include_str!("../../fixtures/found.html");
    const NOT_FOUND_PAGE: &str = include_str!("../../fixtures/not_found.html");

    #[test]
    fn found_fixture_yields_definitions_in_order() {
        let payload = extract_payload(FOUND_PAGE, &ScriptMarkerLocator::default()).unwrap();
        let result = build_result(payload, PageStatus::Found).unwrap();

        let LookupResult::Found(definitions) = result else {
            panic!("expected definitions");
        };

        assert_eq!(definitions.len(), 2);
        let first = &definitions[0];
        assert_eq!(first.part_of_speech, "adjective");
        assert_eq!(first.short_definition, "feeling joy");

        let synonyms: Vec<(&str, u32)> = first
            .synonyms
            .iter()
            .map(|r| (r.word.as_str(), r.similarity.value()))
            .collect();
        assert_eq!(
            synonyms,
            [
                ("glad", 100),
                ("cheerful", 80),
                ("delighted", 80),
                ("joyful", 50),
                ("merry", 50),
                ("content", 10),
                ("chipper", 10)
            ]
        );

        let antonyms: Vec<&str> = first.antonyms.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(antonyms, ["sad", "miserable"]);
        assert_eq!(first.antonyms[1].similarity, Similarity::from_raw(50));

        assert_eq!(definitions[1].part_of_speech, "adjective");
        assert_eq!(definitions[1].short_definition, "fortunate");
        assert!(definitions[1].antonyms.is_empty());
    }

    #[test]
    fn not_found_fixture_yields_suggestions() {
        let payload = extract_payload(NOT_FOUND_PAGE, &ScriptMarkerLocator::default()).unwrap();
        let result = build_result(payload, PageStatus::NotFound).unwrap();

        assert!(!result.is_found());
        assert_eq!(
            result,
            LookupResult::NotFound(vec![
                "happy".to_string(),
                "hippy".to_string(),
                "happily".to_string()
            ])
        );
    }

    #[test]
    fn undefined_does_not_break_parsing() {
        let html = "<script>window.INITIAL_STATE = {\"a\":undefined,\"b\":[undefined]};</script>";
        let payload = extract_payload(html, &ScriptMarkerLocator::default()).unwrap();
        assert_eq!(payload["a"], Value::Null);
        assert_eq!(payload["b"][0], Value::Null);
    }

    #[test]
    fn missing_marker_is_an_error() {
        let err = extract_payload("<html></html>", &ScriptMarkerLocator::default()).unwrap_err();
        assert!(matches!(err, ExtractError::MarkerNotFound));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let html = "<script>window.INITIAL_STATE = {not json};</script>";
        let err = extract_payload(html, &ScriptMarkerLocator::default()).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidJson(_)));
    }

    #[test]
    fn locator_is_swappable() {
        struct WholeBody;

        impl PayloadLocator for WholeBody {
            fn locate<'a>(&self, html: &'a str) -> Option<&'a str> {
                Some(html)
            }
        }

        let payload = extract_payload("{\"ok\":true}", &WholeBody).unwrap();
        assert_eq!(payload["ok"], Value::Bool(true));
    }
}
