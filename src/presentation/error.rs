use std::any::Any;

use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;

use crate::application::services::TranscribeError;

/// Every failure body carries at least `error`; `details` only where the
/// category exposes it.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Map a pipeline failure to its user-facing status and message. Internal
/// detail is logged server-side; only the unexpected category echoes it back.
pub fn map_transcribe_error(error: TranscribeError) -> Response {
    let (status, body) = match error {
        TranscribeError::InitializationFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("Failed to initialize Vertex AI"),
        ),
        TranscribeError::InvalidAudio(_) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("Invalid audio data provided"),
        ),
        TranscribeError::ServiceUnavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("Vertex AI service is currently unavailable"),
        ),
        TranscribeError::Persist(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::with_details("An unexpected error occurred", e.to_string()),
        ),
        TranscribeError::Unexpected(m) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::with_details("An unexpected error occurred", m),
        ),
    };

    (status, Json(body)).into_response()
}

/// Last-resort handler for panics escaping a request: log the payload and
/// answer with the generic 500 body instead of dropping the connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    tracing::error!(error = %details, "Request handler panicked");

    let body = serde_json::json!({
        "error": "Internal Server Error",
        "details": details,
    });

    let mut response = axum::http::Response::new(Full::from(body.to_string()));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Fallback for unmatched routes.
pub async fn not_found_handler(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::with_details(
            "Not Found",
            format!("no route for {uri}"),
        )),
    )
        .into_response()
}
