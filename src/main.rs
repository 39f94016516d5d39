use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use sentiscribe::application::services::TranscriptionService;
use sentiscribe::infrastructure::llm::VertexClientFactory;
use sentiscribe::infrastructure::observability::{init_tracing, TracingConfig};
use sentiscribe::infrastructure::storage::LocalResultStore;
use sentiscribe::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig::new(settings.environment),
        settings.server.port,
    );

    let model_factory = Arc::new(VertexClientFactory::new(
        settings.vertex.project_id.clone(),
        settings.vertex.location.clone(),
        settings.vertex.model.clone(),
        settings.vertex.access_token.clone(),
    ));
    let result_store = Arc::new(LocalResultStore::new(&settings.storage.result_path));

    let transcription_service = Arc::new(TranscriptionService::new(model_factory, result_store));

    let state = AppState {
        transcription_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
