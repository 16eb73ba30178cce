use super::energy::EnergyCalculatorTool;
use super::error::ToolError;
use super::nutrition::NutritionLookupTool;
use crate::types::{ToolCallRequest, ToolCallResult, ToolDeclaration};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A synchronous, side-effect free capability exposed to the model.
pub trait Tool: Send + Sync {
    fn declaration(&self) -> ToolDeclaration;

    /// Run the tool against the raw argument bag sent by the model.
    fn call(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// Maps stable tool names to handlers. Declarations keep registration order.
#[derive(Default)]
pub struct ToolRegistry {
    order: Vec<String>,
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the nutrition lookup and energy calculator.
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry
            .register(NutritionLookupTool::default())
            .register(EnergyCalculatorTool);
        registry
    }

    /// Adds a tool, replacing any earlier tool with the same name.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> &mut Self {
        let name = tool.declaration().name;
        if self.tools.insert(name.clone(), Arc::new(tool)).is_none() {
            self.order.push(name);
        } else {
            debug!(tool = %name, "Replaced previously registered tool");
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.declaration())
            .collect()
    }

    /// Typed invocation; callers that feed a conversation want [`dispatch`](Self::dispatch).
    pub fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(arguments)
    }

    /// Executes a model tool call. Failures become `{"error": ...}` results so
    /// the conversation can continue.
    pub fn dispatch(&self, request: &ToolCallRequest) -> ToolCallResult {
        let arguments = Value::Object(request.arguments.clone());
        let result = match self.invoke(&request.name, arguments) {
            Ok(value) => {
                info!(tool = %request.name, "Tool executed");
                value
            }
            Err(error) => {
                warn!(tool = %request.name, %error, "Tool call failed; returning error payload");
                error.to_result()
            }
        };

        ToolCallResult {
            name: request.name.clone(),
            result: as_object(result),
        }
    }
}

// The model API only accepts object-shaped tool responses.
fn as_object(value: Value) -> Value {
    match value {
        Value::Object(_) => value,
        other => json!({ "result": other }),
    }
}
