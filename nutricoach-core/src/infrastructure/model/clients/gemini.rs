//! Gemini client implementation

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::base::{HttpClientBase, resolve_api_key};
use crate::config::ProviderConfig;
use crate::infrastructure::model::adapter::{GeminiPart, MessageAdapter};
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

const PROVIDER_ID: &str = "gemini";

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    base: HttpClientBase,
    api_path: String,
}

impl GeminiClient {
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ModelError> {
        let api_key = resolve_api_key(PROVIDER_ID, Some(&config.api_key));
        Self::new(config, api_key)
    }

    /// Build a client with an explicit key instead of reading the environment.
    pub fn new(config: &ProviderConfig, api_key: Option<String>) -> Result<Self, ModelError> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        Ok(Self {
            base: HttpClientBase::new(
                PROVIDER_ID.to_string(),
                config.endpoint.clone(),
                api_key,
                timeout,
            )?,
            api_path: config.api_path.trim_matches('/').to_string(),
        })
    }

    fn build_model_url(&self, model: &str) -> String {
        self.base
            .build_url(&format!("{}/{model}:generateContent", self.api_path))
    }
}

#[async_trait]
impl ModelProvider for GeminiClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn ensure_ready(&self) -> Result<(), ModelError> {
        self.base.require_api_key().map(|_| ())
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.build_model_url(&request.model);
        let payload = build_payload(&request);

        info!(
            provider = self.base.id.as_str(),
            model = request.model.as_str(),
            turns = request.contents.len(),
            tools = request.tools.len(),
            "Sending request to Gemini"
        );

        let response: GeminiResponse = self.base.post_with_query_key(&url, &payload).await?;
        debug!("Received response from Gemini");

        let parts = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .ok_or_else(|| ModelError::invalid_response(&self.base.id, "missing candidate content"))?;

        Ok(ModelResponse::new(MessageAdapter::from_gemini_parts(parts)))
    }
}

/// `generateContent` body. `systemInstruction` and `tools` are omitted when empty.
fn build_payload(request: &ModelRequest) -> Value {
    let mut payload = json!({
        "contents": MessageAdapter::to_gemini_format(&request.contents),
        "generationConfig": {
            "temperature": request.temperature
        }
    });

    if !request.system_instruction.is_empty() {
        payload["systemInstruction"] = json!({
            "parts": [{"text": request.system_instruction}]
        });
    }

    if let Some(tools) = MessageAdapter::to_gemini_tools(&request.tools) {
        payload["tools"] = tools;
    }
    payload
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}
