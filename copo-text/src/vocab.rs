//! Fixed vocabularies used by the normalizer
//!
//! Unit words, connectives and trailing qualifiers live here as named tables
//! so they can be extended and tested apart from the stripping algorithm.

use std::sync::LazyLock;

/// A measure word that may precede an ingredient ("60 ml de", "2 doses de")
#[derive(Debug, Clone)]
pub struct UnitWord {
    /// Every spelling, singular and plural
    pub forms: &'static [&'static str],
    pub category: &'static str,
    /// Phrases that complete the measure ("colher de sopa")
    pub complements: &'static [&'static str],
    /// Also an ingredient name in its own right. The normalizer never strips
    /// these, so "1 limão" yields "Limão".
    pub ambiguous: bool,
}

/// The unit vocabulary, grouped by category
pub static UNIT_WORDS: &[UnitWord] = &[
    // === VOLUME ===
    UnitWord { forms: &["ml"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["cl"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["l"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["oz"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["cs"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["dose", "doses"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["dash", "dashes"], category: "volume", complements: &[], ambiguous: false },
    UnitWord { forms: &["gota", "gotas"], category: "volume", complements: &[], ambiguous: false },

    // === MASS ===
    UnitWord { forms: &["g", "gr"], category: "mass", complements: &[], ambiguous: false },
    UnitWord { forms: &["kg"], category: "mass", complements: &[], ambiguous: false },
    UnitWord { forms: &["pitada", "pitadas"], category: "mass", complements: &[], ambiguous: false },

    // === SPOONS & CUPS ===
    UnitWord {
        forms: &["colher", "colheres"],
        category: "spoon",
        complements: &["de sopa", "de chá", "de café", "de bar"],
        ambiguous: false,
    },
    UnitWord {
        forms: &["xícara", "xícaras"],
        category: "spoon",
        complements: &["de chá"],
        ambiguous: false,
    },
    UnitWord { forms: &["scoop", "scoops"], category: "spoon", complements: &[], ambiguous: false },

    // === VESSELS & PACKAGING ===
    UnitWord { forms: &["copo", "copos"], category: "vessel", complements: &[], ambiguous: false },
    UnitWord { forms: &["lata", "latas"], category: "vessel", complements: &[], ambiguous: false },
    UnitWord { forms: &["garrafa", "garrafas"], category: "vessel", complements: &[], ambiguous: false },
    UnitWord { forms: &["vidro", "vidros"], category: "vessel", complements: &[], ambiguous: false },
    UnitWord { forms: &["pacote", "pacotes"], category: "vessel", complements: &[], ambiguous: false },
    UnitWord { forms: &["sachê", "sachês"], category: "vessel", complements: &[], ambiguous: false },

    // === PIECES & PORTIONS ===
    UnitWord { forms: &["unidade", "unidades", "un"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["gomo", "gomos"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["fatia", "fatias"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["rodela", "rodelas"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["ramo", "ramos"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["folha", "folhas"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["pedaço", "pedaços"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["cubo", "cubos"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["grão", "grãos"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["tablete", "tabletes"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["dúzia", "dúzias"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["lâmina", "lâminas"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["talo", "talos"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["cacho", "cachos"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["punhado", "punhados"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["barra", "barras"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["cabeça", "cabeças"], category: "piece", complements: &[], ambiguous: false },
    UnitWord { forms: &["dente", "dentes"], category: "piece", complements: &[], ambiguous: false },

    // === UNIT AND INGREDIENT ===
    UnitWord { forms: &["ovo", "ovos"], category: "piece", complements: &[], ambiguous: true },
    UnitWord { forms: &["limão", "limões"], category: "piece", complements: &[], ambiguous: true },
];

/// Connectives that may follow a measure ("de", "d'")
pub static CONNECTIVES: &[&str] = &["de", "d'", "d’"];

/// Descriptive suffixes removed from the end of a phrase, applied in order
pub static TRAILING_QUALIFIERS: &[&str] = &[
    "fresco", "fresca", "picado", "picada", "ralado", "ralada", "cortado em cubos", "em cubos",
    "em rodelas", "em pedaços", "para decorar", "opcional", "a gosto", "batido", "batida",
    "quente", "gelado", "gelada", "congelado", "congelada", "em pó", "refinado", "cristal",
    "demerara", "mascavo", "branco", "branca", "tinto", "doce", "seco", "seca", "inteiro",
    "inteira", "espremido", "espremida", "filtrado", "sem semente", "com casca", "sem casca",
    "grande", "pequeno", "médio",
];

/// A unit found at the start of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMatch {
    /// Byte length of the unit word plus any complement
    pub len: usize,
    pub ambiguous: bool,
}

/// Lookup over `UNIT_WORDS`, longest spelling first
pub struct UnitVocabulary {
    forms: Vec<(&'static str, &'static UnitWord)>,
}

/// Global unit vocabulary
pub static UNITS: LazyLock<UnitVocabulary> = LazyLock::new(|| UnitVocabulary::new(UNIT_WORDS));

impl UnitVocabulary {
    pub fn new(words: &'static [UnitWord]) -> Self {
        let mut forms: Vec<(&'static str, &'static UnitWord)> = words
            .iter()
            .flat_map(|w| w.forms.iter().map(move |f| (*f, w)))
            .collect();
        forms.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { forms }
    }

    /// Match a whole unit word (and its complement, if present) at the start
    /// of `text`. `text` must already be lowercase.
    pub fn match_prefix(&self, text: &str) -> Option<UnitMatch> {
        for (form, word) in &self.forms {
            let Some(rest) = text.strip_prefix(form) else { continue };
            if !at_word_end(rest) {
                continue;
            }
            let mut len = form.len();
            let trimmed = rest.trim_start();
            let gap = rest.len() - trimmed.len();
            if gap > 0 {
                if let Some(c) = word
                    .complements
                    .iter()
                    .find(|c| trimmed.strip_prefix(**c).is_some_and(at_word_end))
                {
                    len += gap + c.len();
                }
            }
            return Some(UnitMatch { len, ambiguous: word.ambiguous });
        }
        None
    }
}

/// Strip one leading connective ("de vodka" → "vodka", "d'água" → "água")
pub fn strip_connective(text: &str) -> Option<&str> {
    for conn in CONNECTIVES {
        let Some(rest) = text.strip_prefix(conn) else { continue };
        if conn.ends_with(['\'', '’']) {
            return Some(rest.trim_start());
        }
        if rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
    }
    None
}

/// A unit word ends at whitespace, punctuation or the end of the text
fn at_word_end(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
}
