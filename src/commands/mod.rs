//! Command implementations

pub mod lookup;

pub use lookup::{BaseUrlError, Lookup, LookupConfig, LookupError, lookup_query, run_lookup};
