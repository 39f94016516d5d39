use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ResultStore, ResultStoreError};

/// In-memory store for tests; remembers the last persisted text.
#[derive(Default)]
pub struct MockResultStore {
    last: Mutex<Option<String>>,
}

impl MockResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_persisted(&self) -> Option<String> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultStore for MockResultStore {
    async fn persist(&self, text: &str) -> Result<(), ResultStoreError> {
        *self.last.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Store that always fails, for exercising the persistence-failure path.
pub struct FailingResultStore;

#[async_trait]
impl ResultStore for FailingResultStore {
    async fn persist(&self, _text: &str) -> Result<(), ResultStoreError> {
        Err(ResultStoreError::WriteFailed(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "mock write failure",
        )))
    }
}
