//! Terminal output formatting
//!
//! Display utilities for lookup results and the styles they use.

pub mod display;
pub mod formatters;
pub mod palette;

pub use display::{
    DisplayConfig, print_lookup, render_definitions, render_lookup, render_suggestions,
};
pub use palette::{Palette, Style, Tier, Weight};
