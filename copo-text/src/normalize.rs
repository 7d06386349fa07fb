//! Ingredient phrase normalization
//!
//! Turns a raw catalog phrase such as `"60 ml de vodka gelada"` into the
//! canonical ingredient name `"Vodka"`. Each step is a no-op when its pattern
//! is absent; nothing here can fail.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::vocab::{strip_connective, UNITS, TRAILING_QUALIFIERS};

/// Leading quantity: digits, fractions, separators and brackets, then an
/// optional ordinal mark
fn quantity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[\d\s/.,½¼¾⅓⅔⅛\[\]()\-]+(?:º|ª)?\s*").expect("valid quantity regex")
    })
}

/// Parenthesised unit complement left after the unit, as in `colher (sopa)`
fn leading_parenthetical_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\([^)]*\)\s*").expect("valid parenthetical regex"))
}

fn trailing_parenthetical_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\([^)]*\)$").expect("valid parenthetical regex"))
}

/// Normalize one raw ingredient phrase
///
/// Returns `None` when no letter or digit is left after stripping
/// (e.g. `"2 doses"` or `"2 doses."`).
pub fn normalize(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let mut cleaned = strip_measure(lowered.trim());

    if let Some(rest) = cleaned.strip_prefix("de ") {
        cleaned = rest.trim();
    }

    let cleaned = trailing_parenthetical_regex().replace(cleaned, "");
    let cleaned = strip_qualifiers(cleaned.trim());

    if !cleaned.chars().any(char::is_alphanumeric) {
        trace!(raw, "phrase has no ingredient left");
        return None;
    }
    Some(capitalize(&cleaned))
}

/// Remove a leading quantity/unit/connective clause
///
/// The unit may appear without a quantity ("dose de rum"), but a connective
/// is only consumed after a quantity or unit.
pub fn strip_measure(text: &str) -> &str {
    let mut rest = text;
    let mut consumed = false;

    if let Some(m) = quantity_regex().find(rest) {
        rest = &rest[m.end()..];
        consumed = true;
    }

    if let Some(unit) = UNITS.match_prefix(rest) {
        if !unit.ambiguous {
            rest = rest[unit.len..].trim_start();
            consumed = true;
            if let Some(m) = leading_parenthetical_regex().find(rest) {
                rest = &rest[m.end()..];
            }
        }
    }

    if consumed {
        if let Some(after) = strip_connective(rest) {
            rest = after;
        }
    }
    rest.trim()
}

/// Remove descriptive suffixes
///
/// Passes over `TRAILING_QUALIFIERS` repeat until none applies, so stacked
/// qualifiers ("tinto seco") all go regardless of table order.
pub fn strip_qualifiers(text: &str) -> String {
    let mut cleaned = text.to_string();
    loop {
        let before = cleaned.len();
        for qualifier in TRAILING_QUALIFIERS {
            if let Some(head) = cleaned.strip_suffix(qualifier) {
                if head.ends_with(char::is_whitespace) {
                    cleaned = head.trim().to_string();
                }
            }
        }
        if cleaned.len() == before {
            return cleaned;
        }
    }
}

/// Uppercase the first character only
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_unit_and_connective() {
        assert_eq!(normalize("60 ml de vodka").as_deref(), Some("Vodka"));
        assert_eq!(normalize("1/2 dose de rum").as_deref(), Some("Rum"));
        assert_eq!(normalize("2 colheres de sopa de açúcar").as_deref(), Some("Açúcar"));
        assert_eq!(normalize("1 ½ xícara de chá de leite").as_deref(), Some("Leite"));
        assert_eq!(normalize("3 gotas d'angostura").as_deref(), Some("Angostura"));
    }

    #[test]
    fn test_unit_without_quantity() {
        assert_eq!(normalize("Dose de cachaça").as_deref(), Some("Cachaça"));
        assert_eq!(normalize("folhas de hortelã").as_deref(), Some("Hortelã"));
    }

    #[test]
    fn test_quantity_without_unit() {
        assert_eq!(normalize("2 maracujás").as_deref(), Some("Maracujás"));
        assert_eq!(normalize("(1) cereja").as_deref(), Some("Cereja"));
    }

    #[test]
    fn test_unit_must_be_whole_word() {
        assert_eq!(normalize("1 gin").as_deref(), Some("Gin"));
        assert_eq!(normalize("50 ml gin").as_deref(), Some("Gin"));
        assert_eq!(normalize("Leite condensado").as_deref(), Some("Leite condensado"));
    }

    #[test]
    fn test_ambiguous_unit_is_kept_as_ingredient() {
        assert_eq!(normalize("1 limão").as_deref(), Some("Limão"));
        assert_eq!(normalize("2 ovos").as_deref(), Some("Ovos"));
    }

    #[test]
    fn test_standalone_de_is_stripped_once() {
        assert_eq!(normalize("de vodka").as_deref(), Some("Vodka"));
        assert_eq!(normalize("suco de limão").as_deref(), Some("Suco de limão"));
    }

    #[test]
    fn test_trailing_parenthetical() {
        assert_eq!(normalize("50 ml de gin (London Dry)").as_deref(), Some("Gin"));
        assert_eq!(normalize("açúcar (a gosto) extra").as_deref(), Some("Açúcar (a gosto) extra"));
    }

    #[test]
    fn test_trailing_qualifiers() {
        assert_eq!(normalize("hortelã fresca").as_deref(), Some("Hortelã"));
        assert_eq!(normalize("1 colher de canela em pó").as_deref(), Some("Canela"));
        assert_eq!(normalize("gelo picado").as_deref(), Some("Gelo"));
        assert_eq!(normalize("Rum branco").as_deref(), Some("Rum"));
        // literal suffix only, never a bare qualifier
        assert_eq!(normalize("doce").as_deref(), Some("Doce"));
    }

    #[test]
    fn test_stacked_qualifiers_all_go() {
        assert_eq!(normalize("açúcar refinado branco").as_deref(), Some("Açúcar"));
        assert_eq!(normalize("vinho tinto seco").as_deref(), Some("Vinho"));
        assert_eq!(normalize("hortelã fresca picada").as_deref(), Some("Hortelã"));
    }

    #[test]
    fn test_parenthesised_unit_complement() {
        assert_eq!(normalize("1 colher (sopa) de mel").as_deref(), Some("Mel"));
        assert_eq!(normalize("2 colheres(chá) de canela").as_deref(), Some("Canela"));
        assert_eq!(normalize("1 colher (sopa)"), None);
    }

    #[test]
    fn test_unit_followed_by_punctuation() {
        assert_eq!(normalize("2 doses."), None);
        assert_eq!(normalize("dose."), None);
        assert_eq!(normalize("1 dose, gelada"), None);
    }

    #[test]
    fn test_pure_unit_phrases_are_empty() {
        for phrase in ["2 doses", "ml", "1 colher de sopa", "3 fatias", "Copo", "200 g", "1 dash"] {
            assert_eq!(normalize(phrase), None, "{} should normalize to nothing", phrase);
        }
    }

    #[test]
    fn test_blank_and_numeric_input() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("1/2"), None);
    }

    #[test]
    fn test_idempotent() {
        for phrase in [
            "60 ml de vodka",
            "suco de limão",
            "2 colheres de sopa de açúcar mascavo",
            "hortelã fresca",
            "1 limão",
            "xarope de açúcar (opcional)",
            "hortelã fresca picada",
            "vinho tinto seco",
            "açúcar refinado branco",
            "1 colher (sopa) de mel",
        ] {
            let once = normalize(phrase).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(once, twice, "normalize is not idempotent for {}", phrase);
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("água tônica"), "Água tônica");
        assert_eq!(capitalize("v"), "V");
        assert_eq!(capitalize(""), "");
    }
}
