use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ModelClient, ModelClientFactory};

use super::VertexGeminiClient;

/// Builds a [`VertexGeminiClient`] bound to a fixed project, region and
/// model. A missing access token is the common failure mode; it is logged
/// and reported as an absent handle, never propagated.
pub struct VertexClientFactory {
    project_id: String,
    location: String,
    model: String,
    access_token: Option<String>,
    base_url: Option<String>,
}

impl VertexClientFactory {
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        model: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            model: model.into(),
            access_token,
            base_url: None,
        }
    }

    /// Point produced clients at a different endpoint. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[async_trait]
impl ModelClientFactory for VertexClientFactory {
    async fn initialize(&self) -> Option<Arc<dyn ModelClient>> {
        let token = match &self.access_token {
            Some(t) if !t.is_empty() => t.clone(),
            _ => {
                tracing::error!(
                    project = %self.project_id,
                    location = %self.location,
                    "Failed to initialize Vertex AI: no access token configured"
                );
                return None;
            }
        };

        let mut client = VertexGeminiClient::new(
            self.project_id.clone(),
            self.location.clone(),
            self.model.clone(),
            token,
        );
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.clone());
        }

        Some(Arc::new(client))
    }
}
