//! Approximate drink name search
//!
//! A query matches a name when some substring of the name is within
//! `threshold * query_len` edits of the query (case-insensitive, any
//! position). Hits are ranked by error ratio, softened for longer names by a
//! field-length norm, then by catalog order.

use copo_core::{CatalogDrink, RecipeResult};
use copo_text::{split_ingredients, split_steps, SplitMode};
use tracing::debug;

/// Index configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyConfig {
    /// Maximum accepted `errors / query_len`, from 0.0 (exact) to 1.0
    pub threshold: f64,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

/// One accepted candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit {
    /// Position of the name in the indexed sequence
    pub index: usize,
    /// Minimum edits between the query and any substring of the name
    pub errors: usize,
    /// Ranking score, lower is better
    pub score: f64,
}

struct IndexedName {
    chars: Vec<char>,
    norm: f64,
}

/// Name index built once over the catalog
pub struct NameIndex {
    names: Vec<IndexedName>,
    config: FuzzyConfig,
}

impl NameIndex {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, config: FuzzyConfig) -> Self {
        let names = names
            .into_iter()
            .map(|name| IndexedName {
                chars: name.to_lowercase().chars().collect(),
                norm: field_norm(name),
            })
            .collect();
        Self { names, config }
    }

    /// All accepted candidates, best first
    pub fn search(&self, query: &str) -> Vec<FuzzyHit> {
        let pattern: Vec<char> = query.trim().to_lowercase().chars().collect();
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<FuzzyHit> = self
            .names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let errors = substring_distance(&pattern, &name.chars);
                let ratio = errors as f64 / pattern.len() as f64;
                if ratio > self.config.threshold {
                    return None;
                }
                let score = ratio.max(f64::EPSILON).powf(name.norm);
                Some(FuzzyHit { index, errors, score })
            })
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        debug!(query, hits = hits.len(), "fuzzy name search");
        hits
    }

    pub fn best(&self, query: &str) -> Option<FuzzyHit> {
        self.search(query).into_iter().next()
    }
}

/// `1 / sqrt(word count)`, rounded to three decimals
fn field_norm(name: &str) -> f64 {
    let words = name.split(' ').filter(|w| !w.is_empty()).count().max(1);
    (1.0 / (words as f64).sqrt() * 1000.0).round() / 1000.0
}

/// Smallest edit distance between `pattern` and any substring of `text`
///
/// Levenshtein table where the text may start and end anywhere: row zero is
/// all zeros and the answer is the minimum of the last row.
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let mut prev = vec![0usize; text.len() + 1];
    let mut cur = vec![0usize; text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &t) in text.iter().enumerate() {
            let substitution = prev[j] + usize::from(p != t);
            cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev.into_iter().min().unwrap_or(pattern.len())
}

/// Display-ready recipe for a catalog drink
pub fn build_recipe(drink: &CatalogDrink) -> RecipeResult {
    RecipeResult {
        title: drink.name.clone(),
        description: format!("Receita de {}", drink.name),
        ingredients: split_ingredients(&drink.raw_ingredients, SplitMode::Display),
        instructions: split_steps(&drink.raw_preparation),
        prep_time: drink.prep_time.clone(),
        difficulty: drink.difficulty.clone(),
    }
}
