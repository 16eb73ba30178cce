use super::error::ToolError;
use super::registry::Tool;
use super::similarity::closest_match;
use crate::nutrition::{NUTRITION_TABLE, NutritionRecord};
use crate::types::ToolDeclaration;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

pub const LOOKUP_TOOL_NAME: &str = "get_food_nutrition";

/// Minimum similarity ratio for a fuzzy food match.
pub const LOOKUP_CUTOFF: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(NutritionRecord),
    Missing { query: String },
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn to_value(&self) -> Value {
        match self {
            LookupOutcome::Found(record) => json!({
                "found": true,
                "food": record.food_key,
                "calories": record.calories,
                "protein": record.protein,
                "carbs": record.carbs,
                "fat": record.fat,
                "emoji": record.emoji,
            }),
            LookupOutcome::Missing { query } => json!({
                "found": false,
                "error": format!("Food '{query}' not found"),
            }),
        }
    }
}

/// Resolve a free-text food name against `table`.
pub fn lookup_food(table: &[NutritionRecord], food_name: &str) -> LookupOutcome {
    let query = food_name.to_lowercase();
    let keys = table.iter().map(|record| record.food_key);
    let matched = closest_match(&query, keys, LOOKUP_CUTOFF)
        .and_then(|key| table.iter().find(|record| record.food_key == key));

    match matched {
        Some(record) => {
            debug!(query = food_name, food = record.food_key, "Nutrition lookup matched");
            LookupOutcome::Found(*record)
        }
        None => {
            warn!(query = food_name, "No nutrition record close enough to query");
            LookupOutcome::Missing {
                query: food_name.to_string(),
            }
        }
    }
}

#[derive(Deserialize)]
struct LookupArguments {
    food_name: String,
}

pub struct NutritionLookupTool {
    table: &'static [NutritionRecord],
}

impl NutritionLookupTool {
    pub fn new(table: &'static [NutritionRecord]) -> Self {
        Self { table }
    }
}

impl Default for NutritionLookupTool {
    fn default() -> Self {
        Self::new(NUTRITION_TABLE)
    }
}

impl Tool for NutritionLookupTool {
    fn declaration(&self) -> ToolDeclaration {
        ToolDeclaration {
            name: LOOKUP_TOOL_NAME.to_string(),
            description: "Get nutritional info for a food item".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "food_name": { "type": "string", "description": "Name of food" }
                },
                "required": ["food_name"]
            }),
        }
    }

    fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: LookupArguments = serde_json::from_value(arguments)
            .map_err(|source| ToolError::invalid_arguments(LOOKUP_TOOL_NAME, source))?;
        Ok(lookup_food(self.table, &args.food_name).to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> LookupOutcome {
        lookup_food(NUTRITION_TABLE, name)
    }

    #[test]
    fn exact_key_returns_full_record() {
        let value = lookup("banana").to_value();
        assert_eq!(
            value,
            json!({
                "found": true,
                "food": "banana",
                "calories": 89,
                "protein": 1,
                "carbs": 23,
                "fat": 0,
                "emoji": "🍌",
            })
        );
    }

    #[test]
    fn free_text_is_lowercased_and_fuzzy_matched() {
        match lookup("Chicken Breast") {
            LookupOutcome::Found(record) => assert_eq!(record.food_key, "chicken_breast"),
            other => panic!("expected match, got {other:?}"),
        }
        match lookup("paneer tikka") {
            LookupOutcome::Found(record) => assert_eq!(record.food_key, "paneer"),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn score_exactly_at_cutoff_matches() {
        // 2 * 3 / (3 + 9) == 0.5
        match lookup("egg") {
            LookupOutcome::Found(record) => assert_eq!(record.food_key, "egg_whole"),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn miss_embeds_query_as_typed() {
        let outcome = lookup("Burger");
        assert!(!outcome.is_found());
        assert_eq!(
            outcome.to_value(),
            json!({ "found": false, "error": "Food 'Burger' not found" })
        );
    }

    #[test]
    fn tool_rejects_missing_food_name() {
        let tool = NutritionLookupTool::default();
        let error = tool.call(json!({ "food": "apple" })).expect_err("missing food_name");
        assert!(matches!(error, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn tool_returns_lookup_payload() {
        let tool = NutritionLookupTool::default();
        let value = tool.call(json!({ "food_name": "oat" })).expect("lookup succeeds");
        assert_eq!(value["found"], json!(true));
        assert_eq!(value["food"], json!("oats"));
        assert_eq!(value["calories"], json!(389));
    }
}
