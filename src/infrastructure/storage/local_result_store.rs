use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{ResultStore, ResultStoreError};

/// Writes the latest transcription to a single fixed path.
///
/// Writes are serialized through a mutex so concurrent requests cannot
/// interleave bytes in the file; across requests the last writer wins.
pub struct LocalResultStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl LocalResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

}

#[async_trait]
impl ResultStore for LocalResultStore {
    async fn persist(&self, text: &str) -> Result<(), ResultStoreError> {
        let _guard = self.write_guard.lock().await;
        tokio::fs::write(&self.path, text).await?;
        tracing::debug!(path = %self.path.display(), chars = text.len(), "Result persisted");
        Ok(())
    }
}
