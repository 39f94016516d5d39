use std::sync::Arc;

use async_trait::async_trait;

/// A configured connection to the remote generative-model service.
///
/// Implementations submit the audio bytes as a typed multimodal part together
/// with a text instruction and return the model's response verbatim.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, audio: &[u8], instruction: &str) -> Result<String, ModelClientError>;
}

/// Constructs a [`ModelClient`] handle.
///
/// Initialization failure is a normal, checkable outcome: implementations log
/// the cause and return `None` rather than propagating an error. One attempt
/// per call, no retries.
#[async_trait]
pub trait ModelClientFactory: Send + Sync {
    async fn initialize(&self) -> Option<Arc<dyn ModelClient>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelClientError {
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("audio rejected by remote api: {0}")]
    InvalidAudio(String),
    #[error("{0}")]
    Unexpected(String),
}
