use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentiscribe::application::ports::{ModelClient, ModelClientError};
use sentiscribe::infrastructure::llm::VertexGeminiClient;

const MODEL_PATH: &str =
    "/projects/test-project/locations/us-central1/publishers/google/models/gemini-1.5-flash-002:generateContent";

fn client_for(server: &MockServer) -> VertexGeminiClient {
    VertexGeminiClient::new(
        "test-project",
        "us-central1",
        "gemini-1.5-flash-002",
        "test-token",
    )
    .with_base_url(server.uri())
}

#[tokio::test]
async fn submits_inline_audio_and_returns_text_verbatim() {
    let server = MockServer::start().await;
    let audio = b"webm bytes";

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": "audio/webm", "data": STANDARD.encode(audio) } },
                    { "text": "listen carefully" }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  Transcript with sentiment.  " }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate(audio, "listen carefully")
        .await
        .unwrap();

    // No trimming or post-processing of the model output
    assert_eq!(text, "  Transcript with sentiment.  ");
}

#[tokio::test]
async fn http_503_maps_to_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(b"x", "i").await.unwrap_err();
    assert!(matches!(err, ModelClientError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn http_429_maps_to_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(b"x", "i").await.unwrap_err();
    assert!(matches!(err, ModelClientError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn http_400_maps_to_invalid_audio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("audio could not be processed"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate(b"x", "i").await.unwrap_err();
    assert!(matches!(err, ModelClientError::InvalidAudio(_)));
}

#[tokio::test]
async fn other_http_failures_map_to_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(b"x", "i").await.unwrap_err();
    assert!(matches!(err, ModelClientError::Unexpected(_)));
}

#[tokio::test]
async fn empty_candidates_map_to_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).generate(b"x", "i").await.unwrap_err();
    assert!(matches!(err, ModelClientError::Unexpected(_)));
}

#[tokio::test]
async fn api_error_body_maps_to_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": { "message": "model not found" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(b"x", "i").await.unwrap_err();
    match err {
        ModelClientError::Unexpected(m) => assert_eq!(m, "model not found"),
        other => panic!("expected Unexpected, got {other:?}"),
    }
}
