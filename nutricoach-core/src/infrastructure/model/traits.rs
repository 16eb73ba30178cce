//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;

/// Trait for hosted model backends
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider identifier used in logs and errors
    fn id(&self) -> &str;

    /// Checks that the provider can be called at all, e.g. that credentials exist
    fn ensure_ready(&self) -> Result<(), ModelError> {
        Ok(())
    }

    /// Send one generation request
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
