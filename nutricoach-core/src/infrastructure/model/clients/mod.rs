//! Model clients

mod base;
mod gemini;

pub use base::{HttpClientBase, resolve_api_key};
pub use gemini::GeminiClient;
