//! Formatting utilities for terminal output

use super::palette::Palette;
use crate::core::RelatedWord;

/// Format a related word painted by tier, followed by its score
#[must_use]
pub fn format_related(word: &RelatedWord, palette: &Palette) -> String {
    format!(
        "{} {}",
        palette.paint(&word.word, word.similarity),
        palette.muted.apply(&format!("({})", word.similarity))
    )
}

/// Format up to `max` related words on one line
///
/// Words beyond `max` are summarized as a `+N more` suffix. Order is kept.
#[must_use]
pub fn format_related_list(words: &[RelatedWord], max: usize, palette: &Palette) -> String {
    let shown: Vec<String> = words
        .iter()
        .take(max)
        .map(|w| format_related(w, palette))
        .collect();

    let mut line = shown.join(", ");

    let hidden = words.len().saturating_sub(max);
    if hidden > 0 {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&palette.muted.apply(&format!("+{hidden} more")).to_string());
    }

    line
}

/// Create a horizontal rule
#[must_use]
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}
