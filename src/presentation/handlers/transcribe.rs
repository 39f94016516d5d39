use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ModelClientFactory, ResultStore};
use crate::domain::AudioPayload;
use crate::presentation::error::{map_transcribe_error, ErrorResponse};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub result: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<M, S>(
    State(state): State<AppState<M, S>>,
    request: Result<Json<TranscribeRequest>, JsonRejection>,
) -> impl IntoResponse
where
    M: ModelClientFactory + 'static,
    S: ResultStore + 'static,
{
    // Even an unparseable body gets the JSON error shape
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Request body was not valid JSON");
            return (
                rejection.status(),
                Json(ErrorResponse::with_details(
                    "Invalid JSON body",
                    rejection.body_text(),
                )),
            )
                .into_response();
        }
    };

    let payload = match request.audio {
        Some(audio) if !audio.is_empty() => AudioPayload::new(audio),
        _ => {
            tracing::warn!("Transcription request with no audio data");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No audio data received")),
            )
                .into_response();
        }
    };

    match state.transcription_service.transcribe(&payload).await {
        Ok(result) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                result: result.into_text(),
            }),
        )
            .into_response(),
        Err(e) => map_transcribe_error(e),
    }
}
