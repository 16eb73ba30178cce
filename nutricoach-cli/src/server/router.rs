use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use nutricoach_core::coach::NutriCoach;
use nutricoach_core::model::ModelProvider;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub fn router<P>(coach: Arc<NutriCoach<P>>) -> Router
where
    P: ModelProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let state = Arc::new(ServerState::new(coach));
    Router::new()
        .route("/health", get(routes::health::health_handler::<P>))
        .route("/consult", post(routes::consult::consult_handler::<P>))
        .layer(cors)
        .with_state(state)
}

pub(super) async fn serve<P>(coach: Arc<NutriCoach<P>>, addr: SocketAddr) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    info!(%addr, "Binding REST server");
    let app = router(coach);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
