//! In-memory model providers shared by unit tests.

use crate::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use crate::types::{Part, ToolCallRequest, Turn};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Replays canned model turns in order and records every request.
#[derive(Clone)]
pub struct ScriptedProvider {
    responses: Arc<Mutex<Vec<Turn>>>,
    recordings: Arc<Mutex<Vec<ModelRequest>>>,
    ready: bool,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Turn>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            recordings: Arc::new(Mutex::new(Vec::new())),
            ready: true,
        }
    }

    /// Provider whose readiness check reports a missing key.
    pub fn without_key() -> Self {
        Self {
            ready: false,
            ..Self::new(Vec::new())
        }
    }

    pub async fn requests(&self) -> Vec<ModelRequest> {
        self.recordings.lock().await.clone()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    fn id(&self) -> &str {
        "scripted"
    }

    fn ensure_ready(&self) -> Result<(), ModelError> {
        if self.ready {
            Ok(())
        } else {
            Err(ModelError::missing_api_key("scripted"))
        }
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.recordings.lock().await.push(request);
        let mut responses = self.responses.lock().await;
        if responses.is_empty() {
            return Err(ModelError::invalid_response("scripted", "script exhausted"));
        }
        Ok(ModelResponse::new(responses.remove(0)))
    }
}

pub fn text(value: &str) -> Turn {
    Turn::model(vec![Part::Text(value.to_string())])
}

pub fn calls(calls: Vec<(&str, Value)>) -> Turn {
    Turn::model(
        calls
            .into_iter()
            .map(|(name, args)| {
                let args = match args {
                    Value::Object(map) => map,
                    _ => Default::default(),
                };
                Part::ToolCall(ToolCallRequest::new(name, args))
            })
            .collect(),
    )
}
