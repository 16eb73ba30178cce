//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelProvider trait
//! - `adapter` - Conversation to Gemini wire format
//! - `clients` - HTTP client implementations

pub mod adapter;
pub mod clients;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clients::GeminiClient;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
