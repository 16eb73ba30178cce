mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ConsultResponse, ErrorResponse, HealthResponse};
pub use error::ServerError;
pub use router::router;

use nutricoach_core::coach::NutriCoach;
use nutricoach_core::model::ModelProvider;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve<P>(coach: Arc<NutriCoach<P>>, addr: SocketAddr) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(coach, addr).await
}
