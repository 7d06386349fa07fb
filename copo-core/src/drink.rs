//! Drink records and query results

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry, loaded once and never mutated
///
/// Missing or `null` text fields deserialize as empty strings, so a malformed
/// entry contributes nothing instead of failing the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDrink {
    #[serde(rename = "nome", default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Delimiter-separated ingredient phrases, quantities included
    #[serde(rename = "ingredientes", default, deserialize_with = "null_as_empty")]
    pub raw_ingredients: String,

    /// Sentence-separated preparation steps
    #[serde(rename = "modo_preparo", default, deserialize_with = "null_as_empty")]
    pub raw_preparation: String,

    #[serde(rename = "prepTime", default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogDrink {
    pub fn new(
        name: impl Into<String>,
        raw_ingredients: impl Into<String>,
        raw_preparation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_ingredients: raw_ingredients.into(),
            raw_preparation: raw_preparation.into(),
            prep_time: None,
            difficulty: None,
        }
    }

    pub fn with_prep_time(mut self, prep_time: impl Into<String>) -> Self {
        self.prep_time = Some(prep_time.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }
}

/// Alcohol classification of a matched drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholContent {
    #[serde(rename = "Alcoólico")]
    Alcoholic,
    #[serde(rename = "Sem álcool")]
    NonAlcoholic,
    /// Used by the not-found sentinel
    #[serde(rename = "")]
    Unknown,
}

impl AlcoholContent {
    pub fn label(&self) -> &'static str {
        match self {
            AlcoholContent::Alcoholic => "Alcoólico",
            AlcoholContent::NonAlcoholic => "Sem álcool",
            AlcoholContent::Unknown => "",
        }
    }
}

impl std::fmt::Display for AlcoholContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of ingredient-based discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub alcohol_content: AlcoholContent,
    pub difficulty: String,
}

impl MatchResult {
    pub const NOT_FOUND_NAME: &'static str = "Nenhum drink encontrado";
    pub const NOT_FOUND_DESCRIPTION: &'static str =
        "Nenhuma receita combina com os ingredientes fornecidos.";
    pub const NOT_FOUND_HINT: &'static str =
        "Tente adicionar outros ingredientes ou revise os nomes.";

    /// Sentinel returned when no drink shares an ingredient with the query
    pub fn not_found() -> Self {
        Self {
            name: Self::NOT_FOUND_NAME.to_string(),
            description: Self::NOT_FOUND_DESCRIPTION.to_string(),
            ingredients: Vec::new(),
            instructions: vec![Self::NOT_FOUND_HINT.to_string()],
            alcohol_content: AlcoholContent::Unknown,
            difficulty: String::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.ingredients.is_empty() && self.alcohol_content == AlcoholContent::Unknown
    }
}

/// Result of a name-based recipe lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<String>,
    pub difficulty: Option<String>,
}
