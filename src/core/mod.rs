//! Core domain types for thesaurus lookups
//!
//! This module contains the plain data types with no I/O: the sanitized query
//! and the definitions or suggestions a lookup produces.

mod definition;
mod query;

pub use definition::{Definition, LookupResult, RelatedWord, Similarity};
pub use query::{Query, QueryError};
