use serde::{Deserialize, Serialize};

pub const DEFAULT_FOOD_EMOJI: &str = "🍽️";

/// Reference values per 100 g serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionRecord {
    pub food_key: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub emoji: &'static str,
}

const fn record(
    food_key: &'static str,
    calories: u32,
    protein: u32,
    carbs: u32,
    fat: u32,
    emoji: &'static str,
) -> NutritionRecord {
    NutritionRecord {
        food_key,
        calories,
        protein,
        carbs,
        fat,
        emoji,
    }
}

pub static NUTRITION_TABLE: &[NutritionRecord] = &[
    record("wheat_roti", 250, 8, 50, 2, "🌾"),
    record("white_rice", 130, 2, 28, 0, "🍚"),
    record("brown_rice", 112, 2, 24, 1, "🍚"),
    record("dal_cooked", 105, 8, 14, 0, "🫘"),
    record("paneer", 265, 18, 1, 20, "🧀"),
    record("egg_whole", 155, 13, 1, 11, "🥚"),
    record("chicken_breast", 165, 31, 0, 3, "🍗"),
    record("banana", 89, 1, 23, 0, "🍌"),
    record("apple", 52, 0, 14, 0, "🍎"),
    record("milk_whole", 60, 3, 5, 3, "🥛"),
    record("almonds", 579, 21, 22, 50, "🌰"),
    record("spinach", 23, 3, 4, 0, "🥬"),
    record("yogurt", 59, 10, 4, 0, "🥛"),
    record("oats", 389, 17, 66, 7, "🌾"),
];

/// Structured result of the meal analysis conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub foods: Vec<FoodItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default = "default_emoji")]
    pub emoji: String,
}

fn default_emoji() -> String {
    DEFAULT_FOOD_EMOJI.to_string()
}

impl MealAnalysis {
    /// Every numeric field must be finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let totals = [
            ("total_calories", self.total_calories),
            ("total_protein", self.total_protein),
            ("total_carbs", self.total_carbs),
            ("total_fats", self.total_fats),
        ];
        for (field, value) in totals {
            check_amount(field, value)?;
        }
        for (index, food) in self.foods.iter().enumerate() {
            if food.name.trim().is_empty() {
                return Err(format!("foods[{index}].name is empty"));
            }
            let amounts = [
                ("calories", food.calories),
                ("protein", food.protein),
                ("carbs", food.carbs),
                ("fat", food.fat),
            ];
            for (field, value) in amounts {
                check_amount(&format!("foods[{index}].{field}"), value)?;
            }
        }
        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{field} must be a non-negative number, got {value}"))
    }
}
