use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ModelClientFactory, ResultStore};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub model: String,
}

/// Liveness probe. Reports the configured environment and model so a probe
/// can tell deployments apart; it does not call the remote service.
pub async fn health_handler<M, S>(State(state): State<AppState<M, S>>) -> impl IntoResponse
where
    M: ModelClientFactory + 'static,
    S: ResultStore + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            environment: state.settings.environment.to_string(),
            model: state.settings.vertex.model.clone(),
        }),
    )
}
