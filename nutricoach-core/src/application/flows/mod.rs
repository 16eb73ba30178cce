//! The two conversations behind a consultation: meal analysis, then coaching.

mod analysis;
mod coaching;

pub use analysis::{
    ANALYSIS_INSTRUCTION, AnalysisParseError, MealAnalysisFlow, analysis_user_message,
    parse_meal_analysis,
};
pub use coaching::{COACHING_USER_MESSAGE, CoachingFlow, coaching_instruction};

use crate::agent::AgentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error("failed to encode user profile: {0}")]
    Profile(#[from] serde_json::Error),
    #[error("coach returned an empty response")]
    EmptyCoaching,
}

impl FlowError {
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Agent(err) => err.user_message(),
            FlowError::Profile(_) => "The profile could not be sent to the coach.".to_string(),
            FlowError::EmptyCoaching => "The coach did not return any feedback.".to_string(),
        }
    }
}
