//! Terminal styles for similarity tiers
//!
//! Styles are plain values handed to the renderer rather than global tables, so
//! callers can swap the whole palette.

use crate::core::Similarity;
use colored::{Color, ColoredString, Colorize};

/// How closely a related word matches, for display purposes only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strong,
    Moderate,
    Weak,
}

impl Tier {
    pub const STRONG_THRESHOLD: u32 = 90;
    pub const MODERATE_THRESHOLD: u32 = 50;

    /// Bucket a similarity into a display tier
    ///
    /// # Examples
    /// ```
    /// use thesaurus::core::Similarity;
    /// use thesaurus::output::Tier;
    ///
    /// assert_eq!(Tier::of(Similarity::from_raw(100)), Tier::Strong);
    /// assert_eq!(Tier::of(Similarity::from_raw(-80)), Tier::Moderate);
    /// assert_eq!(Tier::of(Similarity::from_raw(10)), Tier::Weak);
    /// ```
    #[must_use]
    pub const fn of(similarity: Similarity) -> Self {
        let value = similarity.value();
        if value >= Self::STRONG_THRESHOLD {
            Self::Strong
        } else if value >= Self::MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Font weight applied on top of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Bold,
    Regular,
    Faint,
}

/// A color and weight pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub weight: Weight,
}

impl Style {
    #[must_use]
    pub const fn new(color: Color, weight: Weight) -> Self {
        Self { color, weight }
    }

    /// Apply this style to `text`
    #[must_use]
    pub fn apply(self, text: &str) -> ColoredString {
        let colored = text.color(self.color);
        match self.weight {
            Weight::Bold => colored.bold(),
            Weight::Regular => colored,
            Weight::Faint => colored.dimmed(),
        }
    }
}

/// Every style the presenter uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub strong: Style,
    pub moderate: Style,
    pub weak: Style,
    /// Part of speech and section labels
    pub heading: Style,
    /// Most relevant spelling suggestion
    pub highlight: Style,
    /// Scores, separators and overflow counts
    pub muted: Style,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        strong: Style::new(Color::Red, Weight::Bold),
        moderate: Style::new(Color::Yellow, Weight::Bold),
        weak: Style::new(Color::White, Weight::Faint),
        heading: Style::new(Color::Cyan, Weight::Bold),
        highlight: Style::new(Color::Green, Weight::Bold),
        muted: Style::new(Color::BrightBlack, Weight::Regular),
    };

    #[must_use]
    pub const fn tier_style(&self, tier: Tier) -> Style {
        match tier {
            Tier::Strong => self.strong,
            Tier::Moderate => self.moderate,
            Tier::Weak => self.weak,
        }
    }

    /// Paint `text` in the style of the tier `similarity` falls into
    #[must_use]
    pub fn paint(&self, text: &str, similarity: Similarity) -> ColoredString {
        self.tier_style(Tier::of(similarity)).apply(text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
