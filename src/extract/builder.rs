//! Building lookup results from the parsed payload
//!
//! Definitions live at `lexigraphData.slugEntries[0].entries[*].posGroups`,
//! suggestions at `spellSuggestionsData`. Any other shape is an error: a
//! malformed payload most likely means the site changed its format, and a
//! partial answer would be misleading.

use crate::core::{Definition, LookupResult, RelatedWord, Similarity};
use crate::fetch::PageStatus;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::fmt;

/// The payload did not have the expected structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    detail: String,
}

impl ShapeError {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected response shape: {}", self.detail)
    }
}

impl std::error::Error for ShapeError {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoundPayload {
    lexigraph_data: LexigraphData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LexigraphData {
    slug_entries: Vec<SlugEntry>,
}

#[derive(Deserialize)]
struct SlugEntry {
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    #[serde(default)]
    pos_groups: Option<Vec<PosGroup>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PosGroup {
    pos: String,
    short_definitions: Vec<ShortDefinition>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShortDefinition {
    short_def: String,
    #[serde(deserialize_with = "required_list")]
    synonyms: Vec<RawRelated>,
    #[serde(deserialize_with = "required_list")]
    antonyms: Vec<RawRelated>,
}

/// A list whose key must be present but whose value may be `null`
///
/// With `deserialize_with` set, serde reports an absent key as a missing
/// field instead of falling back to `None`.
fn required_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRelated {
    target_word: String,
    similarity: RawSimilarity,
}

/// The site has sent similarity both as a number and as a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSimilarity {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawSimilarity {
    fn to_similarity(&self) -> Result<Similarity, ShapeError> {
        let raw = match self {
            Self::Integer(n) => *n,
            Self::Float(x) => x.round() as i64,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .or_else(|_| s.parse::<f64>().map(|x| x.round() as i64))
                    .map_err(|_| ShapeError::new(format!("similarity {s:?} is not a number")))?
            }
        };
        Ok(Similarity::from_raw(raw))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundPayload {
    spell_suggestions_data: Vec<String>,
}

/// Turn a parsed payload into a lookup result
///
/// `status` selects which branch of the payload is read.
///
/// # Errors
///
/// Returns `ShapeError` if any expected key is missing or has the wrong type,
/// or if no entry carries part-of-speech groups.
pub fn build_result(payload: Value, status: PageStatus) -> Result<LookupResult, ShapeError> {
    match status {
        PageStatus::Found => build_definitions(payload).map(LookupResult::Found),
        PageStatus::NotFound => build_suggestions(payload).map(LookupResult::NotFound),
    }
}

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ShapeError> {
    serde_json::from_value(payload).map_err(|e| ShapeError::new(e.to_string()))
}

fn build_definitions(payload: Value) -> Result<Vec<Definition>, ShapeError> {
    let payload: FoundPayload = decode(payload)?;

    let slug = payload
        .lexigraph_data
        .slug_entries
        .into_iter()
        .next()
        .ok_or_else(|| ShapeError::new("no slug entries"))?;

    let groups = slug
        .entries
        .into_iter()
        .find_map(|entry| entry.pos_groups)
        .ok_or_else(|| ShapeError::new("no entry with part-of-speech groups"))?;

    let mut definitions = Vec::new();
    for group in groups {
        for short in group.short_definitions {
            definitions.push(Definition {
                part_of_speech: group.pos.clone(),
                short_definition: short.short_def,
                synonyms: related_words(short.synonyms)?,
                antonyms: related_words(short.antonyms)?,
            });
        }
    }

    Ok(definitions)
}

/// Keeps the first occurrence of each target word, in payload order
fn related_words(raw: Vec<RawRelated>) -> Result<Vec<RelatedWord>, ShapeError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::with_capacity(raw.len());
    for r in raw {
        let similarity = r.similarity.to_similarity()?;
        if seen.insert(r.target_word.clone()) {
            words.push(RelatedWord::new(r.target_word, similarity));
        }
    }
    Ok(words)
}

fn build_suggestions(payload: Value) -> Result<Vec<String>, ShapeError> {
    let payload: NotFoundPayload = decode(payload)?;
    Ok(payload.spell_suggestions_data)
}
