use super::error::ConfigError;
use crate::agent::AgentOptions;
use crate::constants::{
    DEFAULT_ANALYSIS_TEMPERATURE, DEFAULT_ANALYSIS_TOOL_ROUNDS, DEFAULT_API_KEY_ENV,
    DEFAULT_COACHING_TEMPERATURE, DEFAULT_COACHING_TOOL_ROUNDS, DEFAULT_GEMINI_API_PATH,
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL, DEFAULT_REST_ADDR,
};
use std::path::Path;

/// Application configuration loaded from nutricoach.toml
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model: String,
    pub provider: ProviderConfig,
    pub analysis: FlowConfig,
    pub coaching: FlowConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            provider: ProviderConfig::default(),
            analysis: FlowConfig::analysis(),
            coaching: FlowConfig::coaching(),
            server: ServerConfig::default(),
        }
    }
}

/// Hosted Gemini endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_path: String,
    /// Name of the environment variable holding the key, never the key itself.
    pub api_key: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_path: DEFAULT_GEMINI_API_PATH.to_string(),
            api_key: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    pub temperature: f32,
    pub max_tool_rounds: usize,
}

impl FlowConfig {
    pub fn analysis() -> Self {
        Self {
            temperature: DEFAULT_ANALYSIS_TEMPERATURE,
            max_tool_rounds: DEFAULT_ANALYSIS_TOOL_ROUNDS,
        }
    }

    pub fn coaching() -> Self {
        Self {
            temperature: DEFAULT_COACHING_TEMPERATURE,
            max_tool_rounds: DEFAULT_COACHING_TOOL_ROUNDS,
        }
    }
}

impl From<&FlowConfig> for AgentOptions {
    fn from(config: &FlowConfig) -> Self {
        AgentOptions {
            temperature: config.temperature,
            max_tool_rounds: config.max_tool_rounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_REST_ADDR.to_string(),
        }
    }
}
