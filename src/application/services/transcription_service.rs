use std::sync::Arc;

use crate::application::ports::{
    ModelClientError, ModelClientFactory, ResultStore, ResultStoreError,
};
use crate::domain::{AudioPayload, TranscriptionResult, ANALYSIS_INSTRUCTION};

/// Linear transcription pipeline: initialize the model handle, decode the
/// payload, submit it with the fixed instruction, persist the result.
///
/// The model handle is obtained fresh per call and dropped afterwards; the
/// factory decides whether that is a new connection or a shared one.
pub struct TranscriptionService<M, S>
where
    M: ModelClientFactory,
    S: ResultStore,
{
    model_factory: Arc<M>,
    result_store: Arc<S>,
}

impl<M, S> TranscriptionService<M, S>
where
    M: ModelClientFactory,
    S: ResultStore,
{
    pub fn new(model_factory: Arc<M>, result_store: Arc<S>) -> Self {
        Self {
            model_factory,
            result_store,
        }
    }

    pub async fn transcribe(
        &self,
        payload: &AudioPayload,
    ) -> Result<TranscriptionResult, TranscribeError> {
        let Some(model) = self.model_factory.initialize().await else {
            return Err(TranscribeError::InitializationFailed);
        };

        let audio = payload.decode().map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed audio payload");
            TranscribeError::InvalidAudio(e.to_string())
        })?;

        tracing::debug!(bytes = audio.len(), "Submitting audio for analysis");

        let text = model
            .generate(&audio, ANALYSIS_INSTRUCTION)
            .await
            .map_err(|e| match e {
                ModelClientError::ServiceUnavailable(m) => {
                    tracing::error!(error = %m, "Model service unavailable");
                    TranscribeError::ServiceUnavailable(m)
                }
                ModelClientError::InvalidAudio(m) => {
                    tracing::warn!(error = %m, "Remote api rejected audio");
                    TranscribeError::InvalidAudio(m)
                }
                ModelClientError::Unexpected(m) => {
                    tracing::error!(error = %m, "Unexpected model client failure");
                    TranscribeError::Unexpected(m)
                }
            })?;

        let result = TranscriptionResult::new(text);

        // Fail closed: a result we could not persist is not reported as a
        // success, matching the pipeline's single-outcome contract.
        self.result_store.persist(result.text()).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist transcription result");
            TranscribeError::Persist(e)
        })?;

        tracing::info!(chars = result.text().len(), "Transcription completed");

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("model client initialization failed")]
    InitializationFailed,
    #[error("invalid audio data: {0}")]
    InvalidAudio(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("persist: {0}")]
    Persist(#[from] ResultStoreError),
    #[error("{0}")]
    Unexpected(String),
}
