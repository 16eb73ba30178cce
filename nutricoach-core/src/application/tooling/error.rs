use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool requested: {0}")]
    UnknownTool(String),
    #[error("invalid arguments for tool '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolError {
    pub fn invalid_arguments(tool: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            source,
        }
    }

    /// Structured payload handed back to the model in place of a result.
    pub fn to_result(&self) -> Value {
        match self {
            ToolError::UnknownTool(_) => json!({ "error": "Unknown tool" }),
            ToolError::InvalidArguments { tool, source } => json!({
                "error": format!("Invalid arguments for {tool}: {source}")
            }),
        }
    }
}
