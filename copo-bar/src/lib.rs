//! Copo Bar - drink discovery and recipe lookup
//!
//! `Bar` owns the static catalog and everything derived from it:
//! - ingredient-overlap discovery (`find_drink`)
//! - approximate name search (`find_recipe`)
//! - cached index views (`all_ingredients`, `popular_ingredients`, `all_drink_names`)
//!
//! Every lookup is a pure function of the query and the catalog. Derived
//! state is computed once, on first use.

mod alcohol;
mod fuzzy;
mod index;
mod matcher;

#[cfg(test)]
mod fixtures;

pub use alcohol::{classify, contains_alcohol, ALCOHOLIC_KEYWORDS};
pub use fuzzy::{build_recipe, substring_distance, FuzzyConfig, FuzzyHit, NameIndex};
pub use index::{CatalogIndex, IngredientCount, DEFAULT_POPULAR_COUNT};
pub use matcher::{build_match, find_drink, prepare_query, score_drink, DEFAULT_DIFFICULTY};

use copo_core::{Catalog, CatalogDrink, MatchResult, RecipeResult};
use std::sync::OnceLock;
use tracing::info;

/// Main Copo engine
pub struct Bar {
    index: CatalogIndex,
    names: OnceLock<NameIndex>,
    fuzzy: FuzzyConfig,
}

impl Bar {
    pub fn new(catalog: Catalog) -> Self {
        info!(drinks = catalog.len(), "bar ready");
        Self {
            index: CatalogIndex::new(catalog),
            names: OnceLock::new(),
            fuzzy: FuzzyConfig::default(),
        }
    }

    pub fn with_fuzzy_config(mut self, config: FuzzyConfig) -> Self {
        self.fuzzy = config;
        self.names = OnceLock::new();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.index.catalog()
    }

    /// Operation 1: best drink for a list of user ingredients
    pub fn find_drink<S: AsRef<str>>(&self, ingredients: &[S]) -> MatchResult {
        matcher::find_drink(self.catalog(), ingredients)
    }

    /// Operation 2: recipe of the drink whose name best matches `query`
    pub fn find_recipe(&self, query: &str) -> Option<RecipeResult> {
        let hit = self.name_index().best(query)?;
        self.catalog().get(hit.index).map(build_recipe)
    }

    /// Recipe for a known catalog drink, looked up by exact name
    pub fn recipe_by_name(&self, name: &str) -> Option<RecipeResult> {
        self.catalog().by_name(name).map(build_recipe)
    }

    /// Operation 3: distinct ingredient names, sorted
    pub fn all_ingredients(&self) -> &[String] {
        self.index.all_ingredients()
    }

    /// Operation 3: the `n` most frequent ingredients
    pub fn popular_ingredients(&self, n: usize) -> Vec<String> {
        self.index.popular_ingredients(n)
    }

    pub fn ingredient_frequencies(&self) -> &[IngredientCount] {
        self.index.ingredient_frequencies()
    }

    /// Operation 3: drink names, sorted
    pub fn all_drink_names(&self) -> &[String] {
        self.index.all_drink_names()
    }

    fn name_index(&self) -> &NameIndex {
        self.names.get_or_init(|| {
            NameIndex::new(
                self.catalog().iter().map(|d: &CatalogDrink| d.name.as_str()),
                self.fuzzy,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_catalog;
    use copo_core::AlcoholContent;

    #[test]
    fn test_find_recipe_tolerates_typo() {
        let bar = Bar::new(sample_catalog());
        let recipe = bar.find_recipe("Mojitoo").unwrap();
        assert_eq!(recipe.title, "Mojito");
        assert_eq!(recipe.prep_time.as_deref(), Some("7 min"));
        assert_eq!(recipe.difficulty.as_deref(), Some("Médio"));
        assert_eq!(recipe.instructions.len(), 3);
    }

    #[test]
    fn test_find_recipe_not_found() {
        let bar = Bar::new(sample_catalog());
        assert!(bar.find_recipe("xyzwq").is_none());
        assert!(bar.find_recipe("").is_none());
    }

    #[test]
    fn test_find_recipe_empty_fields() {
        let bar = Bar::new(sample_catalog());
        let recipe = bar.find_recipe("Cosmopolitan").unwrap();
        assert!(recipe.prep_time.is_none());
        assert!(recipe.difficulty.is_none());
        let recipe = bar.find_recipe("sem receita").unwrap();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_strict_fuzzy_config() {
        let bar = Bar::new(sample_catalog()).with_fuzzy_config(FuzzyConfig { threshold: 0.0 });
        assert!(bar.find_recipe("Mojitoo").is_none());
        assert!(bar.find_recipe("mojito").is_some());
    }

    #[test]
    fn test_find_drink_through_bar() {
        let bar = Bar::new(sample_catalog());
        let result = bar.find_drink(&["vodka".to_string()]);
        assert_eq!(result.name, "Cosmopolitan");
        assert_eq!(result.alcohol_content, AlcoholContent::Alcoholic);
    }

    #[test]
    fn test_index_views_through_bar() {
        let bar = Bar::new(sample_catalog());
        assert_eq!(bar.all_drink_names().len(), 5);
        assert_eq!(bar.popular_ingredients(DEFAULT_POPULAR_COUNT).len(), 10);
        assert_eq!(bar.ingredient_frequencies().len(), bar.all_ingredients().len());
    }

    #[test]
    fn test_recipe_by_name_is_exact() {
        let bar = Bar::new(sample_catalog());
        assert!(bar.recipe_by_name("Caipirinha").is_some());
        assert!(bar.recipe_by_name("caipirinha").is_none());
    }

    #[test]
    fn test_result_serializes_for_clients() {
        let bar = Bar::new(sample_catalog());
        let json = serde_json::to_value(bar.find_drink(&["laranja"])).unwrap();
        assert_eq!(json["alcoholContent"], "Sem álcool");
        assert_eq!(json["difficulty"], "Fácil");
    }
}
