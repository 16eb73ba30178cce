use super::errors::AgentError;
use super::models::{AgentOptions, AgentOutcome, AgentStep};
use crate::model::{ModelProvider, ModelRequest};
use crate::tooling::ToolRegistry;
use crate::types::{Conversation, ToolCallResult, Turn};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Agent<P: ModelProvider> {
    provider: Arc<P>,
    registry: Arc<ToolRegistry>,
    model: String,
}

impl<P: ModelProvider> Agent<P> {
    pub fn new(provider: Arc<P>, registry: Arc<ToolRegistry>, model: impl Into<String>) -> Self {
        Self {
            provider,
            registry,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn run(
        &self,
        system_instruction: &str,
        user_message: &str,
        options: &AgentOptions,
    ) -> Result<AgentOutcome, AgentError> {
        info!(
            provider = self.provider.id(),
            model = self.model.as_str(),
            max_tool_rounds = options.max_tool_rounds,
            "Agent run started"
        );
        let declarations = self.registry.declarations();
        let mut conversation = Conversation::new(user_message);
        let mut steps = Vec::new();
        let mut requests = 0usize;
        let mut rounds = 0usize;

        loop {
            let offer_tools = rounds == 0 || rounds < options.max_tool_rounds;
            debug!(
                turns = conversation.len(),
                rounds, offer_tools, "Submitting agent turn to model provider"
            );
            let request = ModelRequest {
                model: self.model.clone(),
                system_instruction: system_instruction.to_string(),
                contents: conversation.turns().to_vec(),
                tools: if offer_tools {
                    declarations.clone()
                } else {
                    Vec::new()
                },
                temperature: options.temperature,
            };

            let response = self.provider.chat(request).await?;
            requests += 1;

            if !response.turn.has_tool_calls() {
                info!(requests, tool_steps = steps.len(), "Agent returned final response");
                return Ok(AgentOutcome {
                    response: response.text(),
                    steps,
                    requests,
                    skipped_calls: 0,
                });
            }

            if rounds >= options.max_tool_rounds {
                let skipped: Vec<&str> = response.tool_calls().map(|c| c.name.as_str()).collect();
                warn!(
                    ?skipped,
                    max_tool_rounds = options.max_tool_rounds,
                    "Tool rounds exhausted; tool calls left unexecuted"
                );
                return Ok(AgentOutcome {
                    response: response.text(),
                    skipped_calls: skipped.len(),
                    steps,
                    requests,
                });
            }
            rounds += 1;

            let results: Vec<ToolCallResult> = response
                .tool_calls()
                .map(|call| {
                    info!(tool = %call.name, round = rounds, "Agent requested tool execution");
                    let result = self.registry.dispatch(call);
                    steps.push(AgentStep {
                        tool: call.name.clone(),
                        input: Value::Object(call.arguments.clone()),
                        success: result.result.get("error").is_none(),
                        output: result.result.clone(),
                    });
                    result
                })
                .collect();

            conversation.push(response.turn);
            conversation.push(Turn::tool_results(results));
        }
    }
}
