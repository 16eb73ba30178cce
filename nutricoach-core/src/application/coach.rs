//! Consultation service: validates a request, runs meal analysis then
//! coaching on one shared agent, and applies the user-facing failure policy.

use crate::agent::Agent;
use crate::config::AppConfig;
use crate::flows::{CoachingFlow, FlowError, MealAnalysisFlow};
use crate::model::{ModelError, ModelProvider};
use crate::nutrition::MealAnalysis;
use crate::profile::{ActivityLevel, Sex, UserProfile, normalize_label};
use crate::report::Report;
use crate::tooling::ToolRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

pub const EMPTY_MEAL_MESSAGE: &str = "❌ Please describe your meal!";
pub const MISSING_API_KEY_MESSAGE: &str =
    "❌ API Key not configured! Please set it in the configuration.";
pub const SERVICE_FAILURE_MESSAGE: &str = "❌ Something went wrong while contacting the nutrition service. Please check your API key and try again.";

/// Meal description plus the raw profile labels a form would submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultRequest {
    pub meal: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: String,
    pub activity_level: String,
    pub goal: String,
}

impl Default for ConsultRequest {
    fn default() -> Self {
        Self {
            meal: String::new(),
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 35,
            sex: "Male".to_string(),
            activity_level: "Moderate".to_string(),
            goal: "Muscle Gain".to_string(),
        }
    }
}

impl ConsultRequest {
    pub fn new(meal: impl Into<String>) -> Self {
        Self {
            meal: meal.into(),
            ..Self::default()
        }
    }

    /// Normalise the form labels into a [`UserProfile`].
    pub fn profile(&self) -> Result<UserProfile, ConsultError> {
        for (field, value) in [("Weight", self.weight_kg), ("Height", self.height_cm)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConsultError::InvalidProfile(format!(
                    "{field} must be a positive number."
                )));
            }
        }
        if self.age == 0 {
            return Err(ConsultError::InvalidProfile(
                "Age must be a positive whole number.".to_string(),
            ));
        }
        let sex = Sex::from_label(&self.sex).ok_or_else(|| {
            ConsultError::InvalidProfile("Sex must be male or female.".to_string())
        })?;
        let activity_level = ActivityLevel::from_label(&self.activity_level).ok_or_else(|| {
            ConsultError::InvalidProfile(
                "Activity level must be one of sedentary, light, moderate, active, very_active."
                    .to_string(),
            )
        })?;

        Ok(UserProfile {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age: self.age,
            sex,
            activity_level,
            goal: normalize_label(&self.goal),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Consultation {
    pub profile: UserProfile,
    pub analysis: MealAnalysis,
    pub feedback: String,
}

impl Consultation {
    pub fn report(&self) -> Report {
        Report::new(&self.analysis, &self.feedback)
    }
}

#[derive(Debug, Error)]
pub enum ConsultError {
    #[error("meal description is empty")]
    EmptyMeal,
    #[error(transparent)]
    MissingApiKey(ModelError),
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl ConsultError {
    /// Rejected before any model call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ConsultError::Flow(_))
    }

    /// Text shown to the end user. Flow failures are never itemised.
    pub fn user_message(&self) -> String {
        match self {
            ConsultError::EmptyMeal => EMPTY_MEAL_MESSAGE.to_string(),
            ConsultError::MissingApiKey(_) => MISSING_API_KEY_MESSAGE.to_string(),
            ConsultError::InvalidProfile(reason) => format!("❌ {reason}"),
            ConsultError::Flow(_) => SERVICE_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Operator-facing cause. Logged next to the error, never shown to the end user.
    pub fn detail(&self) -> String {
        match self {
            ConsultError::MissingApiKey(err) => err.user_message(),
            ConsultError::Flow(err) => err.user_message(),
            other => other.user_message(),
        }
    }
}

/// Owns the agent shared by both flows. Build once and share behind an `Arc`.
pub struct NutriCoach<P: ModelProvider> {
    agent: Agent<P>,
    analysis: MealAnalysisFlow,
    coaching: CoachingFlow,
}

impl<P: ModelProvider> NutriCoach<P> {
    pub fn new(agent: Agent<P>, analysis: MealAnalysisFlow, coaching: CoachingFlow) -> Self {
        Self {
            agent,
            analysis,
            coaching,
        }
    }

    pub fn from_config(provider: P, config: &AppConfig) -> Self {
        let agent = Agent::new(
            Arc::new(provider),
            Arc::new(ToolRegistry::with_builtin_tools()),
            config.model.clone(),
        );
        Self::new(
            agent,
            MealAnalysisFlow::new((&config.analysis).into()),
            CoachingFlow::new((&config.coaching).into()),
        )
    }

    pub fn agent(&self) -> &Agent<P> {
        &self.agent
    }

    pub async fn analyze_meal(&self, meal: &str) -> Result<MealAnalysis, FlowError> {
        self.analysis.run(&self.agent, meal).await
    }

    pub async fn coach(
        &self,
        profile: &UserProfile,
        analysis: &MealAnalysis,
    ) -> Result<String, FlowError> {
        self.coaching.run(&self.agent, profile, analysis).await
    }

    pub async fn consult(&self, request: &ConsultRequest) -> Result<Consultation, ConsultError> {
        let meal = request.meal.trim();
        if meal.is_empty() {
            return Err(ConsultError::EmptyMeal);
        }
        self.agent
            .provider()
            .ensure_ready()
            .map_err(ConsultError::MissingApiKey)?;
        let profile = request.profile()?;

        info!(meal_chars = meal.len(), "Consultation started");
        let analysis = self.analyze_meal(meal).await?;
        let feedback = self.coach(&profile, &analysis).await?;
        info!(foods = analysis.foods.len(), "Consultation finished");

        Ok(Consultation {
            profile,
            analysis,
            feedback,
        })
    }

    /// Like [`consult`](Self::consult) but always renders something displayable.
    pub async fn report(&self, request: &ConsultRequest) -> Report {
        match self.consult(request).await {
            Ok(consultation) => consultation.report(),
            Err(err) => {
                let detail = err.detail();
                if err.is_validation() {
                    warn!(error = %err, detail = detail.as_str(), "Consultation rejected");
                } else {
                    error!(error = %err, detail = detail.as_str(), "Consultation failed");
                }
                Report::failure(err.user_message())
            }
        }
    }
}
