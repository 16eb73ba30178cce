//! Markdown rendering of a consultation into three independent blocks.

use crate::nutrition::MealAnalysis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub nutrition_summary: String,
    pub food_details: String,
    pub coach_feedback: String,
}

impl Report {
    pub fn new(analysis: &MealAnalysis, feedback: &str) -> Self {
        Self {
            nutrition_summary: nutrition_summary(analysis),
            food_details: food_details(analysis),
            coach_feedback: coach_feedback(feedback),
        }
    }

    /// Message in the first block, the others blank.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            nutrition_summary: message.into(),
            food_details: String::new(),
            coach_feedback: String::new(),
        }
    }
}

pub fn nutrition_summary(analysis: &MealAnalysis) -> String {
    format!(
        "## 📊 Nutritional Breakdown\n\n\
         **Total Calories:** {} kcal  \n\
         **Protein:** {}g  \n\
         **Carbs:** {}g  \n\
         **Fats:** {}g\n",
        analysis.total_calories,
        analysis.total_protein,
        analysis.total_carbs,
        analysis.total_fats
    )
}

pub fn food_details(analysis: &MealAnalysis) -> String {
    let mut details = String::from("## 🍽️ Food Items\n\n");
    if analysis.foods.is_empty() {
        details.push_str("*No foods identified*\n");
        return details;
    }
    for food in &analysis.foods {
        details.push_str(&format!(
            "**{} {}**\n- Calories: {} kcal\n- Protein: {}g | Carbs: {}g | Fats: {}g\n\n",
            food.emoji,
            display_name(&food.name),
            food.calories,
            food.protein,
            food.carbs,
            food.fat
        ));
    }
    details
}

pub fn coach_feedback(feedback: &str) -> String {
    format!("## 💪 Your Coach Says:\n\n{feedback}\n")
}

/// `"chicken_breast"` -> `"Chicken Breast"`.
pub fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;
    for ch in name.replace('_', " ").chars() {
        if previous_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_is_letter = ch.is_alphabetic();
    }
    out
}
