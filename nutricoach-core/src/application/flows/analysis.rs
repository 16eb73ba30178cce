use super::FlowError;
use crate::agent::{Agent, AgentOptions};
use crate::model::ModelProvider;
use crate::nutrition::MealAnalysis;
use thiserror::Error;
use tracing::{info, warn};

pub const ANALYSIS_INSTRUCTION: &str = r#"You are a Nutrition Analyst.
Parse the meal, call get_food_nutrition for each food item, then calculate totals.
Return ONLY JSON: {"total_calories": N, "total_protein": N, "total_carbs": N,
"total_fats": N, "foods": [{"name": "...", "calories": N, "protein": N,
"carbs": N, "fat": N, "emoji": "..."}]}"#;

pub fn analysis_user_message(meal: &str) -> String {
    format!("Analyze: {meal}")
}

#[derive(Debug, Error)]
pub enum AnalysisParseError {
    #[error("analysis is not valid JSON of the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("analysis failed validation: {0}")]
    Invalid(String),
}

/// Decode the model's final answer, tolerating markdown code fences.
pub fn parse_meal_analysis(text: &str) -> Result<MealAnalysis, AnalysisParseError> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let analysis: MealAnalysis = serde_json::from_str(cleaned.trim())?;
    analysis.validate().map_err(AnalysisParseError::Invalid)?;
    Ok(analysis)
}

pub struct MealAnalysisFlow {
    options: AgentOptions,
}

impl MealAnalysisFlow {
    pub fn new(options: AgentOptions) -> Self {
        Self { options }
    }

    /// Malformed model output yields a zeroed analysis; only model failures are errors.
    pub async fn run<P: ModelProvider>(
        &self,
        agent: &Agent<P>,
        meal: &str,
    ) -> Result<MealAnalysis, FlowError> {
        let outcome = agent
            .run(ANALYSIS_INSTRUCTION, &analysis_user_message(meal), &self.options)
            .await?;

        match parse_meal_analysis(&outcome.response) {
            Ok(analysis) => {
                info!(
                    foods = analysis.foods.len(),
                    total_calories = analysis.total_calories,
                    lookups = outcome.steps.len(),
                    "Meal analysis parsed"
                );
                Ok(analysis)
            }
            Err(error) => {
                warn!(%error, response = outcome.response.as_str(), "Falling back to empty meal analysis");
                Ok(MealAnalysis::default())
            }
        }
    }
}

impl Default for MealAnalysisFlow {
    fn default() -> Self {
        Self::new(AgentOptions::default())
    }
}
