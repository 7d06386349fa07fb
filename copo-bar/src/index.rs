//! Cached views over the catalog
//!
//! Each view is computed on first access and kept for the lifetime of the
//! index. `OnceLock` guarantees a single stored value even if several threads
//! race on the first call.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use copo_core::Catalog;
use copo_text::extract_ingredients;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many times an ingredient name was extracted across the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCount {
    pub name: String,
    pub count: usize,
}

/// Default number of popular ingredients
pub const DEFAULT_POPULAR_COUNT: usize = 10;

pub struct CatalogIndex {
    catalog: Catalog,
    all_ingredients: OnceLock<Vec<String>>,
    frequencies: OnceLock<Vec<IngredientCount>>,
    drink_names: OnceLock<Vec<String>>,
}

impl CatalogIndex {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            all_ingredients: OnceLock::new(),
            frequencies: OnceLock::new(),
            drink_names: OnceLock::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every distinct canonical ingredient name, sorted ascending
    pub fn all_ingredients(&self) -> &[String] {
        self.all_ingredients.get_or_init(|| {
            let set: BTreeSet<String> = self
                .catalog
                .iter()
                .flat_map(|d| extract_ingredients(&d.raw_ingredients))
                .collect();
            debug!(distinct = set.len(), "ingredient set computed");
            set.into_iter().collect()
        })
    }

    /// Ingredient frequencies, most frequent first
    ///
    /// Every extracted occurrence counts, including repeats inside one drink.
    /// Equal counts keep first-encountered order.
    pub fn ingredient_frequencies(&self) -> &[IngredientCount] {
        self.frequencies.get_or_init(|| {
            let mut counts: Vec<IngredientCount> = Vec::new();
            let mut positions: HashMap<String, usize> = HashMap::new();

            for drink in &self.catalog {
                for name in extract_ingredients(&drink.raw_ingredients) {
                    match positions.get(&name) {
                        Some(&i) => counts[i].count += 1,
                        None => {
                            positions.insert(name.clone(), counts.len());
                            counts.push(IngredientCount { name, count: 1 });
                        }
                    }
                }
            }

            counts.sort_by(|a, b| b.count.cmp(&a.count));
            debug!(distinct = counts.len(), "ingredient frequencies computed");
            counts
        })
    }

    /// The `n` most frequent ingredients; fewer if the catalog has fewer
    pub fn popular_ingredients(&self, n: usize) -> Vec<String> {
        self.ingredient_frequencies()
            .iter()
            .take(n)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Every drink name, sorted by codepoint
    pub fn all_drink_names(&self) -> &[String] {
        self.drink_names.get_or_init(|| {
            let mut names: Vec<String> = self.catalog.iter().map(|d| d.name.clone()).collect();
            names.sort();
            names
        })
    }
}
