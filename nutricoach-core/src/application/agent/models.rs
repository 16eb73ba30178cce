use crate::constants::{DEFAULT_ANALYSIS_TEMPERATURE, DEFAULT_ANALYSIS_TOOL_ROUNDS};
use serde::Serialize;
use serde_json::Value;

/// One executed tool call.
#[derive(Debug, Clone, Serialize)]
pub struct AgentStep {
    pub tool: String,
    pub input: Value,
    /// False when the tool answered with an `error` payload.
    pub success: bool,
    pub output: Value,
}

#[derive(Debug, Clone)]
pub struct AgentOutcome {
    pub response: String,
    pub steps: Vec<AgentStep>,
    /// Number of model requests issued.
    pub requests: usize,
    /// Tool calls received after the last allowed round.
    pub skipped_calls: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentOptions {
    pub temperature: f32,
    /// Tool rounds allowed before a response is treated as final.
    pub max_tool_rounds: usize,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_ANALYSIS_TEMPERATURE,
            max_tool_rounds: DEFAULT_ANALYSIS_TOOL_ROUNDS,
        }
    }
}
