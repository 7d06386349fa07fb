//! Tool definitions and handlers

use copo_bar::Bar;
use copo_core::{CopoError, MatchResult, RecipeResult};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::McpError;

pub fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "find_drink",
                "description": "Find the catalog drink sharing the most ingredients with the given list.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Ingredient names, e.g. [\"vodka\", \"limão\"]"
                        }
                    },
                    "required": ["ingredients"]
                }
            },
            {
                "name": "find_recipe",
                "description": "Look up a drink recipe by approximate name.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Drink name, typos tolerated"
                        }
                    },
                    "required": ["query"]
                }
            },
            {
                "name": "list_ingredients",
                "description": "List every distinct ingredient in the catalog, sorted.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "popular_ingredients",
                "description": "List the most frequent catalog ingredients.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "n": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "How many to return (default: 10)"
                        }
                    }
                }
            },
            {
                "name": "list_drinks",
                "description": "List every drink name in the catalog, sorted.",
                "inputSchema": { "type": "object", "properties": {} }
            }
        ]
    })
}

pub fn call_tool(
    bar: &Bar,
    popular_default: usize,
    name: &str,
    args: &JsonValue,
) -> Result<JsonValue, McpError> {
    debug!(tool = name, "tool call");
    match name {
        "find_drink" => tool_find_drink(bar, args),
        "find_recipe" => tool_find_recipe(bar, args),
        "list_ingredients" => tool_list(bar.all_ingredients(), "ingredientes"),
        "popular_ingredients" => tool_popular_ingredients(bar, popular_default, args),
        "list_drinks" => tool_list(bar.all_drink_names(), "drinks"),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_find_drink(bar: &Bar, args: &JsonValue) -> Result<JsonValue, McpError> {
    let items = args
        .get("ingredients")
        .and_then(|v| v.as_array())
        .ok_or_else(|| McpError::from(CopoError::missing_argument("ingredients")))?;

    let mut ingredients = Vec::with_capacity(items.len());
    for item in items {
        let text = item.as_str().ok_or_else(|| {
            McpError::from(CopoError::invalid_argument("ingredients", "every item must be a string"))
        })?;
        if !text.trim().is_empty() {
            ingredients.push(text);
        }
    }
    if ingredients.is_empty() {
        return Err(CopoError::invalid_argument("ingredients", "add at least one ingredient").into());
    }

    let result = bar.find_drink(&ingredients);
    let found = !result.is_not_found();
    Ok(json!({
        "content": [{ "type": "text", "text": format_match(&result) }],
        "found": found,
        "data": to_json(&result)?,
        "isError": false
    }))
}

fn tool_find_recipe(bar: &Bar, args: &JsonValue) -> Result<JsonValue, McpError> {
    let query = args
        .get("query")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::from(CopoError::missing_argument("query")))?;
    if query.trim().is_empty() {
        return Err(CopoError::invalid_argument("query", "drink name is blank").into());
    }

    match bar.find_recipe(query) {
        Some(recipe) => Ok(json!({
            "content": [{ "type": "text", "text": format_recipe(&recipe) }],
            "found": true,
            "data": to_json(&recipe)?,
            "isError": false
        })),
        None => Ok(json!({
            "content": [{ "type": "text", "text": format!("Nenhuma receita encontrada para '{}'.", query.trim()) }],
            "found": false,
            "data": JsonValue::Null,
            "isError": false
        })),
    }
}

fn tool_popular_ingredients(bar: &Bar, default: usize, args: &JsonValue) -> Result<JsonValue, McpError> {
    let n = match args.get("n") {
        None | Some(JsonValue::Null) => default,
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                McpError::from(CopoError::invalid_argument("n", "must be a non-negative integer"))
            })?,
    };
    let popular = bar.popular_ingredients(n);
    Ok(json!({
        "content": [{ "type": "text", "text": popular.join(", ") }],
        "data": popular
    }))
}

fn tool_list(items: &[String], label: &str) -> Result<JsonValue, McpError> {
    Ok(json!({
        "content": [{ "type": "text", "text": format!("{} {}", items.len(), label) }],
        "data": items
    }))
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, McpError> {
    serde_json::to_value(value).map_err(|e| CopoError::internal(e.to_string()).into())
}

pub fn format_match(result: &MatchResult) -> String {
    let mut out = format!("# {}\n\n{}\n\n", result.name, result.description);
    if !result.ingredients.is_empty() {
        out.push_str("## Ingredientes\n");
        for ingredient in &result.ingredients {
            out.push_str(&format!("- {}\n", ingredient));
        }
        out.push('\n');
    }
    out.push_str("## Modo de preparo\n");
    for (i, step) in result.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    if !result.alcohol_content.label().is_empty() {
        out.push_str(&format!("\n**{}** · {}\n", result.alcohol_content, result.difficulty));
    }
    out
}

pub fn format_recipe(recipe: &RecipeResult) -> String {
    let mut out = format!("# {}\n\n{}\n\n## Ingredientes\n", recipe.title, recipe.description);
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("- {}\n", ingredient));
    }
    out.push_str("\n## Modo de preparo\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    let meta: Vec<&str> = [recipe.prep_time.as_deref(), recipe.difficulty.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if !meta.is_empty() {
        out.push_str(&format!("\n{}\n", meta.join(" · ")));
    }
    out
}
