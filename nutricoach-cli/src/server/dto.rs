use nutricoach_core::nutrition::MealAnalysis;
use nutricoach_core::report::Report;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ConsultResponse {
    pub consultation_id: String,
    #[serde(flatten)]
    pub report: Report,
    /// Absent when the consultation failed after validation.
    pub analysis: Option<MealAnalysis>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
