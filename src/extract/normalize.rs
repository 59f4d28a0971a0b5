//! Payload normalization
//!
//! The embedded state is a JavaScript literal, not strict JSON: absent fields
//! are written as `undefined`.

use std::borrow::Cow;

const UNDEFINED: &str = "undefined";

/// Rewrite bare `undefined` tokens to `null`
///
/// Occurrences inside string literals and as part of longer identifiers are
/// left untouched.
///
/// # Examples
/// ```
/// use thesaurus::extract::normalize_undefined;
///
/// let json = r#"{"a": undefined, "b": "undefined"}"#;
/// assert_eq!(normalize_undefined(json), r#"{"a": null, "b": "undefined"}"#);
/// ```
#[must_use]
pub fn normalize_undefined(json: &str) -> Cow<'_, str> {
    if !json.contains(UNDEFINED) {
        return Cow::Borrowed(json);
    }

    let bytes = json.as_bytes();
    let mut out = String::with_capacity(json.len());
    let mut copied = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
        } else if b == b'"' {
            in_string = true;
            i += 1;
        } else if bytes[i..].starts_with(UNDEFINED.as_bytes())
            && is_token(bytes, i, i + UNDEFINED.len())
        {
            out.push_str(&json[copied..i]);
            out.push_str("null");
            i += UNDEFINED.len();
            copied = i;
        } else {
            i += 1;
        }
    }

    out.push_str(&json[copied..]);
    Cow::Owned(out)
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_token(bytes: &[u8], start: usize, end: usize) -> bool {
    let before = start == 0 || !is_ident_byte(bytes[start - 1]);
    let after = end == bytes.len() || !is_ident_byte(bytes[end]);
    before && after
}
