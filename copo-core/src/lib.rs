//! Copo Core - Fundamental types
//!
//! This crate provides the core types used throughout Copo:
//! - `CatalogDrink`: one record of the static drink catalog
//! - `Catalog`: the ordered, read-only catalog and its loaders
//! - `MatchResult` / `RecipeResult`: values returned by the lookups
//! - `CopoError`: structured errors for clients

mod catalog;
mod drink;
mod error;

pub use catalog::{Catalog, CatalogError};
pub use drink::{AlcoholContent, CatalogDrink, MatchResult, RecipeResult};
pub use error::{codes, CopoError, Severity};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AlcoholContent, Catalog, CatalogDrink, CopoError, MatchResult, RecipeResult};
    pub use crate::error::codes;
}
