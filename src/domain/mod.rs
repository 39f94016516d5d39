mod audio_payload;
mod transcription;

pub use audio_payload::{AudioPayload, AudioPayloadError};
pub use transcription::{TranscriptionResult, ANALYSIS_INSTRUCTION, AUDIO_MIME_TYPE};
