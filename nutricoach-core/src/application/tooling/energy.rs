use super::error::ToolError;
use super::registry::Tool;
use crate::profile::ActivityLevel;
use crate::types::ToolDeclaration;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use tracing::debug;

pub const ENERGY_TOOL_NAME: &str = "calculate_tdee";

/// Daily energy needs from the Mifflin-St Jeor equation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyEstimate {
    pub bmr: i64,
    pub tdee: i64,
    /// Activity level exactly as requested, even when it fell back to moderate.
    pub activity_level: String,
    pub multiplier: f64,
}

/// BMR = 10w + 6.25h - 5a, then +5 when `sex` is "male" (any case), -161
/// for every other value. Unknown activity levels use the moderate multiplier.
/// Both outputs are truncated toward zero.
pub fn compute_energy(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: &str,
    activity_level: &str,
) -> EnergyEstimate {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = if sex.eq_ignore_ascii_case("male") {
        base + 5.0
    } else {
        base - 161.0
    };

    let multiplier = ActivityLevel::from_key(activity_level)
        .unwrap_or_default()
        .multiplier();
    let tdee = bmr * multiplier;

    debug!(bmr, tdee, multiplier, activity_level, "Computed energy estimate");
    EnergyEstimate {
        bmr: bmr.trunc() as i64,
        tdee: tdee.trunc() as i64,
        activity_level: activity_level.to_string(),
        multiplier,
    }
}

#[derive(Deserialize)]
struct EnergyArguments {
    weight_kg: f64,
    height_cm: f64,
    #[serde(deserialize_with = "whole_number")]
    age: u32,
    sex: String,
    #[serde(default = "default_activity_level")]
    activity_level: String,
}

fn default_activity_level() -> String {
    ActivityLevel::Moderate.as_str().to_string()
}

// Models often send integers as `35.0`.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative whole number, got {value}"
        )));
    }
    Ok(value.trunc() as u32)
}

pub struct EnergyCalculatorTool;

impl Tool for EnergyCalculatorTool {
    fn declaration(&self) -> ToolDeclaration {
        ToolDeclaration {
            name: ENERGY_TOOL_NAME.to_string(),
            description: "Calculate daily calorie needs".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "weight_kg": { "type": "number" },
                    "height_cm": { "type": "number" },
                    "age": { "type": "integer" },
                    "sex": { "type": "string" },
                    "activity_level": {
                        "type": "string",
                        "description": "One of sedentary, light, moderate, active, very_active. Defaults to moderate."
                    }
                },
                "required": ["weight_kg", "height_cm", "age", "sex"]
            }),
        }
    }

    fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: EnergyArguments = serde_json::from_value(arguments)
            .map_err(|source| ToolError::invalid_arguments(ENERGY_TOOL_NAME, source))?;
        let estimate = compute_energy(
            args.weight_kg,
            args.height_cm,
            args.age,
            &args.sex,
            &args.activity_level,
        );
        Ok(json!({
            "bmr": estimate.bmr,
            "tdee": estimate.tdee,
            "activity_level": estimate.activity_level,
            "multiplier": estimate.multiplier,
        }))
    }
}
