//! Alcohol classification by keyword

use copo_core::AlcoholContent;

/// Spirits, liqueurs and fortified wines, matched as lowercase substrings
pub static ALCOHOLIC_KEYWORDS: &[&str] = &[
    "vodka", "rum", "tequila", "gin", "whisky", "whiskey",
    "cachaça", "cachaca", "licor", "liqueur", "vermouth", "vermute",
    "campari", "sambuca", "conhaque", "cognac", "triple sec", "amaretto",
    "curaçao", "baileys", "bourbon", "brandy",
];

pub fn contains_alcohol(raw_ingredients: &str) -> bool {
    let text = raw_ingredients.to_lowercase();
    ALCOHOLIC_KEYWORDS.iter().any(|k| text.contains(k))
}

pub fn classify(raw_ingredients: &str) -> AlcoholContent {
    if contains_alcohol(raw_ingredients) {
        AlcoholContent::Alcoholic
    } else {
        AlcoholContent::NonAlcoholic
    }
}
