use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ModelClient, ModelClientError, ModelClientFactory};

/// Canned model client for tests: returns a fixed text or a fixed error and
/// counts invocations.
pub struct MockModelClient {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

enum MockOutcome {
    Text(String),
    ServiceUnavailable,
    InvalidAudio,
    Unexpected(String),
    Panic(String),
}

impl MockModelClient {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Text(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            outcome: MockOutcome::ServiceUnavailable,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting_audio() -> Self {
        Self {
            outcome: MockOutcome::InvalidAudio,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Unexpected(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn panicking(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Panic(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(
        &self,
        _audio: &[u8],
        _instruction: &str,
    ) -> Result<String, ModelClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Text(t) => Ok(t.clone()),
            MockOutcome::ServiceUnavailable => Err(ModelClientError::ServiceUnavailable(
                "mock outage".to_string(),
            )),
            MockOutcome::InvalidAudio => Err(ModelClientError::InvalidAudio(
                "mock rejection".to_string(),
            )),
            MockOutcome::Unexpected(m) => Err(ModelClientError::Unexpected(m.clone())),
            MockOutcome::Panic(m) => panic!("{}", m),
        }
    }
}

/// Factory wrapper for tests: hands out a shared mock client, or nothing at
/// all to exercise the initialization-failure path. Counts initializations.
pub struct MockModelFactory {
    client: Option<Arc<MockModelClient>>,
    initializations: AtomicUsize,
}

impl MockModelFactory {
    pub fn with_client(client: Arc<MockModelClient>) -> Self {
        Self {
            client: Some(client),
            initializations: AtomicUsize::new(0),
        }
    }

    pub fn absent() -> Self {
        Self {
            client: None,
            initializations: AtomicUsize::new(0),
        }
    }

    pub fn initializations(&self) -> usize {
        self.initializations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClientFactory for MockModelFactory {
    async fn initialize(&self) -> Option<Arc<dyn ModelClient>> {
        self.initializations.fetch_add(1, Ordering::SeqCst);
        self.client
            .as_ref()
            .map(|c| Arc::clone(c) as Arc<dyn ModelClient>)
    }
}
