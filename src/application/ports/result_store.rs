use async_trait::async_trait;

/// Persists the latest transcription result by overwriting a single fixed
/// location. The persisted copy must equal the text passed in.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn persist(&self, text: &str) -> Result<(), ResultStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("write failed: {0}")]
    WriteFailed(#[from] std::io::Error),
}
