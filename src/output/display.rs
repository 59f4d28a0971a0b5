//! Display functions for lookup results
//!
//! Rendering builds strings so it can be checked in tests; the `print_*`
//! wrappers write them to stdout.

use super::formatters::{format_related_list, rule};
use super::palette::Palette;
use crate::commands::Lookup;
use crate::core::{Definition, LookupResult};
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 60;

/// How much of a result to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Synonyms and antonyms shown per definition
    pub max_words: usize,
    /// Spelling suggestions shown when the word is unknown
    pub max_suggestions: usize,
}

impl DisplayConfig {
    pub const DEFAULT_MAX_WORDS: usize = 5;
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

    #[must_use]
    pub const fn new(max_words: usize, max_suggestions: usize) -> Self {
        Self {
            max_words,
            max_suggestions,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_WORDS, Self::DEFAULT_MAX_SUGGESTIONS)
    }
}

/// Render a banner with the search term
#[must_use]
pub fn render_header(term: &str, palette: &Palette) -> String {
    let bar = palette.heading.apply(&rule(RULE_WIDTH));
    format!(
        "\n{bar}\n Search term: {}\n{bar}\n",
        palette.highlight.apply(term)
    )
}

/// Render definitions with their synonyms and antonyms
///
/// # Errors
///
/// Returns `fmt::Error` if a value's `Display` implementation fails.
pub fn render_definitions(
    definitions: &[Definition],
    config: &DisplayConfig,
    palette: &Palette,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if definitions.is_empty() {
        writeln!(out, "\nNo synonyms found.")?;
        return Ok(out);
    }

    for definition in definitions {
        writeln!(
            out,
            "\n{} {}",
            palette.heading.apply(&definition.part_of_speech),
            definition.short_definition
        )?;

        if !definition.synonyms.is_empty() {
            writeln!(
                out,
                "  {} {}",
                palette.muted.apply("Synonyms:"),
                format_related_list(&definition.synonyms, config.max_words, palette)
            )?;
        }

        if !definition.antonyms.is_empty() {
            writeln!(
                out,
                "  {} {}",
                palette.muted.apply("Antonyms:"),
                format_related_list(&definition.antonyms, config.max_words, palette)
            )?;
        }
    }

    Ok(out)
}

/// Render spelling suggestions for an unknown term
///
/// The first suggestion is the most relevant one and is highlighted.
///
/// # Errors
///
/// Returns `fmt::Error` if a value's `Display` implementation fails.
pub fn render_suggestions(
    term: &str,
    suggestions: &[String],
    config: &DisplayConfig,
    palette: &Palette,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "\nNo results found for \"{term}\".")?;

    if suggestions.is_empty() || config.max_suggestions == 0 {
        out.push('\n');
        return Ok(out);
    }

    writeln!(out, " Did you mean:")?;
    for (i, suggestion) in suggestions.iter().take(config.max_suggestions).enumerate() {
        if i == 0 {
            writeln!(out, "  {}", palette.highlight.apply(suggestion))?;
        } else {
            writeln!(out, "  {suggestion}")?;
        }
    }

    Ok(out)
}

/// Render a full lookup: header plus definitions or suggestions
///
/// # Errors
///
/// Returns `fmt::Error` if a value's `Display` implementation fails.
pub fn render_lookup(
    lookup: &Lookup,
    config: &DisplayConfig,
    palette: &Palette,
) -> Result<String, fmt::Error> {
    let mut out = render_header(lookup.query.term(), palette);
    let body = match &lookup.result {
        LookupResult::Found(definitions) => render_definitions(definitions, config, palette)?,
        LookupResult::NotFound(suggestions) => {
            render_suggestions(lookup.query.term(), suggestions, config, palette)?
        }
    };
    out.push_str(&body);
    Ok(out)
}

/// Print a full lookup to stdout
///
/// # Errors
///
/// Returns `fmt::Error` if rendering fails.
pub fn print_lookup(
    lookup: &Lookup,
    config: &DisplayConfig,
    palette: &Palette,
) -> Result<(), fmt::Error> {
    print!("{}", render_lookup(lookup, config, palette)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Query, RelatedWord, Similarity};

    fn related(word: &str, similarity: i64) -> RelatedWord {
        RelatedWord::new(word, Similarity::from_raw(similarity))
    }

    fn happy() -> Definition {
        Definition {
            part_of_speech: "adjective".to_string(),
            short_definition: "feeling joy".to_string(),
            synonyms: vec![related("glad", 100), related("cheerful", 80)],
            antonyms: vec![related("sad", -100)],
        }
    }

    #[test]
    fn synonyms_painted_by_tier_before_antonyms() {
        let palette = Palette::DEFAULT;
        let out = render_definitions(&[happy()], &DisplayConfig::default(), &palette).unwrap();

        let glad = palette.strong.apply("glad").to_string();
        let cheerful = palette.moderate.apply("cheerful").to_string();

        let glad_at = out.find(&glad).unwrap();
        let cheerful_at = out.find(&cheerful).unwrap();
        let antonyms_at = out.find("Antonyms:").unwrap();
        let sad_at = out.find("sad").unwrap();

        assert!(glad_at < cheerful_at);
        assert!(cheerful_at < antonyms_at);
        assert!(antonyms_at < sad_at);
        assert!(out.contains("feeling joy"));
        assert!(out.contains("adjective"));
    }

    #[test]
    fn scores_are_non_negative() {
        let out = render_definitions(
            &[happy()],
            &DisplayConfig::default(),
            &Palette::DEFAULT,
        )
        .unwrap();
        assert!(out.contains("(100)"));
        assert!(out.contains("(80)"));
        assert!(!out.contains("(-"));
    }

    #[test]
    fn max_words_caps_each_list() {
        let mut definition = happy();
        definition.synonyms = (0..8).map(|i| related(&format!("word{i}"), 50)).collect();

        let config = DisplayConfig::new(3, 10);
        let out = render_definitions(&[definition], &config, &Palette::DEFAULT).unwrap();

        assert!(out.contains("word0"));
        assert!(out.contains("word2"));
        assert!(!out.contains("word3"));
        assert!(out.contains("+5 more"));
    }

    #[test]
    fn empty_antonyms_line_is_omitted() {
        let mut definition = happy();
        definition.antonyms.clear();
        let out = render_definitions(
            &[definition],
            &DisplayConfig::default(),
            &Palette::DEFAULT,
        )
        .unwrap();
        assert!(!out.contains("Antonyms:"));
    }

    #[test]
    fn no_definitions() {
        let out = render_definitions(&[], &DisplayConfig::default(), &Palette::DEFAULT).unwrap();
        assert!(out.contains("No synonyms found."));
    }

    #[test]
    fn suggestions_highlight_first_and_cap() {
        let palette = Palette::DEFAULT;
        let suggestions: Vec<String> = (0..15).map(|i| format!("guess{i:02}")).collect();
        let out = render_suggestions(
            "hapyy",
            &suggestions,
            &DisplayConfig::default(),
            &palette,
        )
        .unwrap();

        assert!(out.contains("Did you mean:"));
        assert!(out.contains(&palette.highlight.apply("guess00").to_string()));
        assert!(out.contains("guess09"));
        assert!(!out.contains("guess10"));
    }

    #[test]
    fn no_suggestions() {
        let out = render_suggestions(
            "zzzq",
            &[],
            &DisplayConfig::default(),
            &Palette::DEFAULT,
        )
        .unwrap();
        assert!(out.contains("No results found for \"zzzq\"."));
        assert!(!out.contains("Did you mean"));
    }

    #[test]
    fn lookup_renders_header_and_branch() {
        let lookup = Lookup {
            query: Query::parse("happy").unwrap(),
            result: LookupResult::NotFound(vec!["happy".to_string()]),
        };
        let out = render_lookup(&lookup, &DisplayConfig::default(), &Palette::DEFAULT).unwrap();
        assert!(out.contains("Search term:"));
        assert!(out.contains("Did you mean:"));
        assert!(!out.contains("Synonyms:"));
    }
}
