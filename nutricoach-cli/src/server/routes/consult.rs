use super::super::dto::{ConsultResponse, ErrorResponse};
use super::super::state::ServerState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use nutricoach_core::coach::ConsultRequest;
use nutricoach_core::model::ModelProvider;
use nutricoach_core::report::Report;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Validation failures answer 400; every other outcome is a 200 report,
/// with flow failures rendered as the generic message.
pub async fn consult_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    payload: Result<Json<ConsultRequest>, JsonRejection>,
) -> Result<Json<ConsultResponse>, (StatusCode, Json<ErrorResponse>)> {
    let consultation_id = Uuid::new_v4().to_string();
    info!(consultation_id = consultation_id.as_str(), "Received /consult request");

    // Out-of-range or mistyped fields never reach profile validation.
    let Json(payload) = payload.map_err(|rejection| {
        warn!(
            consultation_id = consultation_id.as_str(),
            status = rejection.status().as_u16(),
            "Rejecting malformed /consult body"
        );
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("❌ {}", rejection.body_text()),
            }),
        )
    })?;

    let coach = state.coach();
    match coach.consult(&payload).await {
        Ok(consultation) => {
            info!(
                consultation_id = consultation_id.as_str(),
                foods = consultation.analysis.foods.len(),
                "Consultation completed successfully"
            );
            Ok(Json(ConsultResponse {
                consultation_id,
                report: consultation.report(),
                analysis: Some(consultation.analysis),
            }))
        }
        Err(err) if err.is_validation() => {
            warn!(
                consultation_id = consultation_id.as_str(),
                error = %err,
                detail = %err.detail(),
                "Rejecting /consult request"
            );
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.user_message(),
                }),
            ))
        }
        Err(err) => {
            error!(
                consultation_id = consultation_id.as_str(),
                error = %err,
                detail = %err.detail(),
                "Consultation failed"
            );
            Ok(Json(ConsultResponse {
                consultation_id,
                report: Report::failure(err.user_message()),
                analysis: None,
            }))
        }
    }
}
