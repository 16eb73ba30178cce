use super::FlowError;
use crate::agent::{Agent, AgentOptions};
use crate::constants::{DEFAULT_COACHING_TEMPERATURE, DEFAULT_COACHING_TOOL_ROUNDS};
use crate::model::ModelProvider;
use crate::nutrition::MealAnalysis;
use crate::profile::UserProfile;
use tracing::info;

pub const COACHING_USER_MESSAGE: &str = "Give me feedback!";

/// Instruction for the coach, embedding the profile and the analysed intake.
pub fn coaching_instruction(
    profile: &UserProfile,
    analysis: &MealAnalysis,
) -> Result<String, FlowError> {
    let profile_json = serde_json::to_string(profile)?;
    Ok(format!(
        "You are a Fitness Coach.\n\
         User Profile: {profile_json}\n\
         Intake: {} cal, {}g protein\n\n\
         Use calculate_tdee to find their needs, then provide 2-3 sentences of\n\
         motivational, actionable feedback.",
        analysis.total_calories, analysis.total_protein
    ))
}

pub struct CoachingFlow {
    options: AgentOptions,
}

impl CoachingFlow {
    pub fn new(options: AgentOptions) -> Self {
        Self { options }
    }

    pub async fn run<P: ModelProvider>(
        &self,
        agent: &Agent<P>,
        profile: &UserProfile,
        analysis: &MealAnalysis,
    ) -> Result<String, FlowError> {
        let instruction = coaching_instruction(profile, analysis)?;
        let outcome = agent
            .run(&instruction, COACHING_USER_MESSAGE, &self.options)
            .await?;

        let feedback = outcome.response.trim();
        if feedback.is_empty() {
            return Err(FlowError::EmptyCoaching);
        }
        info!(
            requests = outcome.requests,
            tool_steps = outcome.steps.len(),
            "Coaching feedback ready"
        );
        Ok(feedback.to_string())
    }
}

impl Default for CoachingFlow {
    fn default() -> Self {
        Self::new(AgentOptions {
            temperature: DEFAULT_COACHING_TEMPERATURE,
            max_tool_rounds: DEFAULT_COACHING_TOOL_ROUNDS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{ScriptedProvider, calls, text};
    use crate::profile::{ActivityLevel, Sex};
    use crate::tooling::ToolRegistry;
    use serde_json::json;
    use std::sync::Arc;

    fn profile() -> UserProfile {
        UserProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 35,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: "maintain".into(),
        }
    }

    fn analysis() -> MealAnalysis {
        MealAnalysis {
            total_calories: 520.5,
            total_protein: 31.0,
            ..MealAnalysis::default()
        }
    }

    fn agent(provider: &ScriptedProvider) -> Agent<ScriptedProvider> {
        Agent::new(
            Arc::new(provider.clone()),
            Arc::new(ToolRegistry::with_builtin_tools()),
            "gemini-test",
        )
    }

    #[test]
    fn instruction_embeds_profile_and_intake() {
        let instruction = coaching_instruction(&profile(), &analysis()).expect("instruction");
        assert!(instruction.starts_with("You are a Fitness Coach."));
        assert!(instruction.contains(r#""activity_level":"moderate""#));
        assert!(instruction.contains("Intake: 520.5 cal, 31g protein"));
    }

    #[tokio::test]
    async fn feedback_is_trimmed_and_follow_up_has_no_tools() {
        let provider = ScriptedProvider::new(vec![
            calls(vec![(
                "calculate_tdee",
                json!({ "weight_kg": 80, "height_cm": 180, "age": 35, "sex": "male", "activity_level": "moderate" }),
            )]),
            text("  You need about 2720 kcal a day. Keep it up!\n"),
        ]);
        let feedback = CoachingFlow::default()
            .run(&agent(&provider), &profile(), &analysis())
            .await
            .expect("coaching succeeds");
        assert_eq!(feedback, "You need about 2720 kcal a day. Keep it up!");

        let records = provider.requests().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].temperature, 0.7);
        assert_eq!(records[0].contents[0].text(), COACHING_USER_MESSAGE);
        assert!(records[1].tools.is_empty());
    }

    #[tokio::test]
    async fn blank_feedback_is_an_error() {
        let provider = ScriptedProvider::new(vec![text("   ")]);
        let result = CoachingFlow::default()
            .run(&agent(&provider), &profile(), &analysis())
            .await;
        assert!(matches!(result, Err(FlowError::EmptyCoaching)));
    }
}
