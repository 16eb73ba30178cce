// Shared helpers: a scripted Gemini stand-in and turn builders.

#![allow(dead_code)]

use async_trait::async_trait;
use nutricoach_core::config::AppConfig;
use nutricoach_core::coach::NutriCoach;
use nutricoach_core::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use nutricoach_core::types::{Part, ToolCallRequest, Turn};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ScriptedProvider {
    responses: Arc<Mutex<Vec<Turn>>>,
    recordings: Arc<Mutex<Vec<ModelRequest>>>,
    key: Option<String>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Turn>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            recordings: Arc::new(Mutex::new(Vec::new())),
            key: Some("test-key".to_string()),
        }
    }

    pub fn with_key(mut self, key: Option<&str>) -> Self {
        self.key = key.map(str::to_string);
        self
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
        match self.key.as_deref() {
            Some(key) if !key.trim().is_empty() && key != "YOUR_API_KEY" => Ok(()),
            _ => Err(ModelError::missing_api_key("scripted")),
        }
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.recordings.lock().await.push(request);
        let mut responses = self.responses.lock().await;
        if responses.is_empty() {
            return Err(ModelError::invalid_response("scripted", "no scripted response left"));
        }
        Ok(ModelResponse::new(responses.remove(0)))
    }
}

pub fn coach(provider: &ScriptedProvider) -> NutriCoach<ScriptedProvider> {
    NutriCoach::from_config(provider.clone(), &AppConfig::default())
}

pub fn text(value: &str) -> Turn {
    Turn::model(vec![Part::Text(value.to_string())])
}

pub fn call(name: &str, args: Value) -> Turn {
    calls(vec![(name, args)])
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

pub const OATS_AND_MILK: &str = r#"{"total_calories": 449, "total_protein": 20, "total_carbs": 71,
"total_fats": 10, "foods": [
  {"name": "oats", "calories": 389, "protein": 17, "carbs": 66, "fat": 7, "emoji": "🌾"},
  {"name": "milk_whole", "calories": 60, "protein": 3, "carbs": 5, "fat": 3, "emoji": "🥛"}
]}"#;
