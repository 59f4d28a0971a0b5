//! Thesaurus
//!
//! Looks up synonyms and antonyms on thesaurus.com and prints them with
//! similarity-tiered colors, or spelling suggestions when the word is unknown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use thesaurus::commands::{LookupConfig, run_lookup};
//! use thesaurus::extract::ScriptMarkerLocator;
//! use thesaurus::fetch::HttpPageSource;
//! use thesaurus::output::{DisplayConfig, Palette, print_lookup};
//!
//! let lookup = run_lookup(
//!     "happy",
//!     &HttpPageSource,
//!     &ScriptMarkerLocator::default(),
//!     &LookupConfig::default(),
//! )
//! .unwrap();
//! print_lookup(&lookup, &DisplayConfig::default(), &Palette::DEFAULT).unwrap();
//! ```

// Core domain types
pub mod core;

// Page fetching
pub mod fetch;

// Embedded payload extraction
pub mod extract;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
