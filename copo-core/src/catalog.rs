//! The static drink catalog

use crate::CatalogDrink;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, read-only collection of drinks
///
/// Catalog order is significant: ties in matching and fuzzy ranking go to
/// the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    drinks: Vec<CatalogDrink>,
}

impl Catalog {
    pub fn new(drinks: Vec<CatalogDrink>) -> Self {
        for drink in &drinks {
            if drink.name.trim().is_empty() {
                warn!("catalog entry has no name");
            }
            if drink.raw_ingredients.trim().is_empty() {
                warn!(drink = %drink.name, "catalog entry has no ingredients");
            }
        }
        Self { drinks }
    }

    /// Parse a JSON array of `{nome, ingredientes, modo_preparo, ...}` records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let drinks: Vec<CatalogDrink> = serde_json::from_str(json)?;
        Ok(Self::new(drinks))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), drinks = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn drinks(&self) -> &[CatalogDrink] {
        &self.drinks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogDrink> {
        self.drinks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogDrink> {
        self.drinks.get(index)
    }

    /// Exact (case-sensitive) name lookup
    pub fn by_name(&self, name: &str) -> Option<&CatalogDrink> {
        self.drinks.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

impl From<Vec<CatalogDrink>> for Catalog {
    fn from(drinks: Vec<CatalogDrink>) -> Self {
        Self::new(drinks)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogDrink;
    type IntoIter = std::slice::Iter<'a, CatalogDrink>;

    fn into_iter(self) -> Self::IntoIter {
        self.drinks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"nome": "Mojito", "ingredientes": "50 ml de rum; hortelã", "modo_preparo": "Macere a hortelã"},
        {"nome": "Sem Nada"}
    ]"#;

    #[test]
    fn test_from_json_str_keeps_order() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "Mojito");
        assert_eq!(catalog.get(1).unwrap().name, "Sem Nada");
    }

    #[test]
    fn test_malformed_entry_is_kept() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let empty = catalog.by_name("Sem Nada").unwrap();
        assert!(empty.raw_ingredients.is_empty());
    }

    #[test]
    fn test_null_and_missing_fields_degrade_per_entry() {
        let json = r#"[
            {"nome": "Nulo", "ingredientes": null, "modo_preparo": null, "prepTime": null},
            {"ingredientes": "gelo", "modo_preparo": "Sirva"},
            {"nome": "Gin Tônica", "ingredientes": "gin; água tônica", "modo_preparo": "Misture"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 3);

        let nulls = catalog.get(0).unwrap();
        assert_eq!(nulls.name, "Nulo");
        assert!(nulls.raw_ingredients.is_empty());
        assert!(nulls.raw_preparation.is_empty());
        assert!(nulls.prep_time.is_none());

        let nameless = catalog.get(1).unwrap();
        assert!(nameless.name.is_empty());
        assert_eq!(nameless.raw_ingredients, "gelo");

        assert_eq!(catalog.get(2).unwrap().raw_ingredients, "gin; água tônica");
    }

    #[test]
    fn test_shipped_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/drinks.json");
        let catalog = Catalog::from_path(path).unwrap();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.by_name("Negroni").is_some());
        for drink in &catalog {
            assert!(!drink.name.trim().is_empty());
            assert!(!drink.raw_ingredients.trim().is_empty(), "{} has no ingredients", drink.name);
        }
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_path("/definitely/not/here/drinks.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/drinks.json"));
    }
}
