use std::sync::Arc;

use crate::application::ports::{ModelClientFactory, ResultStore};
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<M, S>
where
    M: ModelClientFactory,
    S: ResultStore,
{
    pub transcription_service: Arc<TranscriptionService<M, S>>,
    pub settings: Settings,
}

impl<M, S> Clone for AppState<M, S>
where
    M: ModelClientFactory,
    S: ResultStore,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            settings: self.settings.clone(),
        }
    }
}
