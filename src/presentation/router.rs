use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ModelClientFactory, ResultStore};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::error::{handle_panic, not_found_handler};
use crate::presentation::handlers::{health_handler, index_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<M, S>(state: AppState<M, S>) -> Router
where
    M: ModelClientFactory + 'static,
    S: ResultStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index_handler).post(transcribe_handler::<M, S>))
        .route("/health", get(health_handler::<M, S>))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
