//! Ingredient-overlap drink discovery
//!
//! A drink scores one point for each of its raw ingredient phrases that
//! contains any of the user's ingredients as a substring. The catalog phrase
//! is the haystack: "limão" finds "suco de limão", never the reverse.

use copo_core::{Catalog, CatalogDrink, MatchResult};
use copo_text::{split_ingredients, split_steps, SplitMode};
use tracing::debug;

use crate::alcohol;

/// Difficulty reported when the catalog entry has none
pub const DEFAULT_DIFFICULTY: &str = "Fácil";

/// Lowercase and trim user ingredients; blank entries are dropped
pub fn prepare_query<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    ingredients
        .iter()
        .map(|i| i.as_ref().trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect()
}

/// Number of the drink's phrases containing at least one query ingredient
pub fn score_drink(drink: &CatalogDrink, query: &[String]) -> usize {
    split_ingredients(&drink.raw_ingredients, SplitMode::Scoring)
        .iter()
        .filter(|phrase| query.iter().any(|q| phrase.contains(q.as_str())))
        .count()
}

/// Best-scoring drink for the given ingredients
///
/// The first drink in catalog order wins ties. With no overlap at all the
/// not-found sentinel is returned.
pub fn find_drink<S: AsRef<str>>(catalog: &Catalog, ingredients: &[S]) -> MatchResult {
    let query = prepare_query(ingredients);

    let mut best: Option<(&CatalogDrink, usize)> = None;
    for drink in catalog {
        let score = score_drink(drink, &query);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((drink, score));
        }
    }

    match best {
        Some((drink, score)) => {
            debug!(drink = %drink.name, score, "best ingredient match");
            build_match(drink)
        }
        None => {
            debug!(query = ?query, "no drink shares an ingredient");
            MatchResult::not_found()
        }
    }
}

/// Display-ready result for a matched drink
pub fn build_match(drink: &CatalogDrink) -> MatchResult {
    MatchResult {
        name: drink.name.clone(),
        description: format!("Um drink delicioso feito com {}.", drink.name),
        ingredients: split_ingredients(&drink.raw_ingredients, SplitMode::Display),
        instructions: split_steps(&drink.raw_preparation),
        alcohol_content: alcohol::classify(&drink.raw_ingredients),
        difficulty: drink
            .difficulty
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DIFFICULTY)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_catalog;
    use copo_core::AlcoholContent;

    #[test]
    fn test_substring_containment_scores() {
        let drink = CatalogDrink::new("Teste", "60 ml de vodka; suco de limão", "");
        assert_eq!(score_drink(&drink, &prepare_query(&["vodka"])), 1);
        assert_eq!(score_drink(&drink, &prepare_query(&["Limão", "vodka"])), 2);
        // the user ingredient must be inside the phrase, not the other way round
        assert_eq!(score_drink(&drink, &prepare_query(&["suco de limão tahiti"])), 0);
    }

    #[test]
    fn test_phrase_counts_once_even_with_two_hits() {
        let drink = CatalogDrink::new("Teste", "suco de limão com vodka", "");
        assert_eq!(score_drink(&drink, &prepare_query(&["limão", "vodka"])), 1);
    }

    #[test]
    fn test_find_best_drink() {
        let result = find_drink(&sample_catalog(), &["cachaça", "limão"]);
        assert_eq!(result.name, "Caipirinha");
        assert_eq!(result.description, "Um drink delicioso feito com Caipirinha.");
        assert_eq!(result.alcohol_content, AlcoholContent::Alcoholic);
        assert_eq!(result.difficulty, "Fácil");
        assert_eq!(
            result.ingredients,
            vec!["1 limão", "2 colheres de açúcar", "50 ml de cachaça", "gelo"]
        );
        assert_eq!(
            result.instructions,
            vec!["Corte o limão em pedaços.", "Macere com o açúcar.", "Adicione gelo e a cachaça."]
        );
    }

    #[test]
    fn test_higher_score_beats_catalog_order() {
        // Caipirinha has 1 phrase with "limão"; Mojito has 2 ("hortelã", "limão")
        let result = find_drink(&sample_catalog(), &["  HORTELÃ ", "limão"]);
        assert_eq!(result.name, "Mojito");
        assert_eq!(result.difficulty, "Médio");
    }

    #[test]
    fn test_tie_goes_to_first_in_catalog() {
        let result = find_drink(&sample_catalog(), &["gelo"]);
        assert_eq!(result.name, "Caipirinha");
    }

    #[test]
    fn test_default_difficulty_and_non_alcoholic() {
        let result = find_drink(&sample_catalog(), &["laranja"]);
        assert_eq!(result.name, "Laranjada");
        assert_eq!(result.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(result.alcohol_content, AlcoholContent::NonAlcoholic);
        assert_eq!(result.instructions, vec!["Misture tudo.", "Sirva gelado."]);
    }

    #[test]
    fn test_no_overlap_returns_sentinel() {
        let result = find_drink(&sample_catalog(), &["chocolate", "pimenta"]);
        assert!(result.is_not_found());
        assert_eq!(result.name, MatchResult::NOT_FOUND_NAME);
        assert!(result.ingredients.is_empty());
        assert_eq!(result.alcohol_content.label(), "");
    }

    #[test]
    fn test_empty_catalog_and_blank_query() {
        assert!(find_drink(&Catalog::default(), &["vodka"]).is_not_found());
        let blank: [&str; 2] = ["", "   "];
        assert!(find_drink(&sample_catalog(), &blank).is_not_found());
        let none: [&str; 0] = [];
        assert!(find_drink(&sample_catalog(), &none).is_not_found());
    }
}
