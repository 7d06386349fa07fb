//! Splitting raw catalog text into ingredient phrases and preparation steps

use std::sync::OnceLock;

use regex::Regex;

use crate::normalize::normalize;

/// How each split ingredient phrase is post-processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Full normalization; empty and one-character results dropped.
    /// Feeds the catalog index.
    Canonical,
    /// Trimmed only, quantities kept. Used for display lists.
    Display,
    /// Trimmed and lowercased. Used for overlap scoring.
    Scoring,
}

/// Ingredient delimiters: semicolon, comma, line break
fn is_delimiter(c: char) -> bool {
    matches!(c, ';' | ',' | '\n')
}

/// Split a raw ingredients string on `;`, `,` or line breaks
///
/// Output order follows the input; duplicates are kept.
pub fn split_ingredients(raw: &str, mode: SplitMode) -> Vec<String> {
    let pieces = raw.split(is_delimiter).map(str::trim);
    match mode {
        SplitMode::Canonical => pieces
            .filter_map(normalize)
            .filter(|name| name.chars().count() > 1)
            .collect(),
        SplitMode::Display => pieces
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        SplitMode::Scoring => pieces
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase)
            .collect(),
    }
}

/// Canonical ingredient names of one drink
pub fn extract_ingredients(raw: &str) -> Vec<String> {
    split_ingredients(raw, SplitMode::Canonical)
}

fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s+").expect("valid sentence regex"))
}

/// Split preparation text into steps, each ending with a period
pub fn split_steps(raw: &str) -> Vec<String> {
    sentence_regex()
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.ends_with('.') {
                s.to_string()
            } else {
                format!("{}.", s)
            }
        })
        .collect()
}
