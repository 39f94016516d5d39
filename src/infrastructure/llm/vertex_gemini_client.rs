use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ModelClient, ModelClientError};
use crate::domain::AUDIO_MIME_TYPE;

// Request types for the Vertex AI generateContent endpoint

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// Response types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Reqwest adapter for Vertex AI Gemini. Submits the audio bytes as an
/// inline-data part together with the instruction text and returns the
/// model's response verbatim.
pub struct VertexGeminiClient {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    location: String,
    model: String,
    access_token: String,
}

impl VertexGeminiClient {
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        model: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        let location = location.into();
        let base_url = format!("https://{location}-aiplatform.googleapis.com/v1");
        Self {
            client: reqwest::Client::new(),
            base_url,
            project_id: project_id.into(),
            location,
            model: model.into(),
            access_token: access_token.into(),
        }
    }

    /// Point the adapter at a different endpoint. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self) -> String {
        format!(
            "{}/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.base_url, self.project_id, self.location, self.model
        )
    }

    fn build_request(audio: &[u8], instruction: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: AUDIO_MIME_TYPE.to_string(),
                            data: STANDARD.encode(audio),
                        }),
                    },
                    Part {
                        text: Some(instruction.to_string()),
                        inline_data: None,
                    },
                ],
            }],
        }
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }
}

#[async_trait]
impl ModelClient for VertexGeminiClient {
    async fn generate(&self, audio: &[u8], instruction: &str) -> Result<String, ModelClientError> {
        let url = self.api_url();
        let body = Self::build_request(audio, instruction);

        tracing::debug!(model = %self.model, bytes = audio.len(), "Calling Vertex AI generateContent");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ModelClientError::ServiceUnavailable(e.to_string())
                } else {
                    ModelClientError::Unexpected(format!("request: {e}"))
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModelClientError::ServiceUnavailable(detail));
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModelClientError::InvalidAudio(detail));
        }

        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModelClientError::Unexpected(format!(
                "status {status}: {detail}"
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelClientError::Unexpected(format!("response body: {e}")))?;

        if let Some(error) = response.error {
            return Err(ModelClientError::Unexpected(error.message));
        }

        Self::extract_text(&response)
            .ok_or_else(|| ModelClientError::Unexpected("empty model response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_audio_part_then_instruction() {
        let request = VertexGeminiClient::build_request(&[1, 2, 3], "describe this");

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);

        let inline = parts[0].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, AUDIO_MIME_TYPE);
        assert_eq!(inline.data, STANDARD.encode([1, 2, 3]));

        assert_eq!(parts[1].text.as_deref(), Some("describe this"));
    }

    #[test]
    fn extracts_text_across_response_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Transcript. " }, { "text": "Positive." }] }
            }]
        }))
        .unwrap();

        assert_eq!(
            VertexGeminiClient::extract_text(&response).as_deref(),
            Some("Transcript. Positive.")
        );
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert!(VertexGeminiClient::extract_text(&response).is_none());
    }
}
