//! Application constants
//!
//! Single source of truth for paths and defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/nutricoach.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Environment variable holding the Gemini API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Key values that ship in sample configs and must never reach the API
pub const PLACEHOLDER_API_KEYS: &[&str] = &["YOUR_API_KEY", "PASTE_YOUR_ACTUAL_API_KEY_HERE"];

/// Default REST bind address
pub const DEFAULT_REST_ADDR: &str = "127.0.0.1:8080";

/// Meal analysis sampling temperature
pub const DEFAULT_ANALYSIS_TEMPERATURE: f32 = 0.1;

/// Tool rounds allowed while analysing a meal
pub const DEFAULT_ANALYSIS_TOOL_ROUNDS: usize = 3;

/// Coaching sampling temperature
pub const DEFAULT_COACHING_TEMPERATURE: f32 = 0.7;

/// Tool rounds allowed while coaching
pub const DEFAULT_COACHING_TOOL_ROUNDS: usize = 1;

/// Upper bound accepted for a sampling temperature
pub const MAX_TEMPERATURE: f32 = 2.0;
