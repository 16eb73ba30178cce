use super::super::dto::HealthResponse;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::State;
use nutricoach_core::model::ModelProvider;
use std::sync::Arc;

pub async fn health_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.coach().agent().model().to_string(),
    })
}
