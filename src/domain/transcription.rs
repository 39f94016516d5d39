/// Instruction submitted alongside every audio clip.
pub const ANALYSIS_INSTRUCTION: &str = "Transcribe the audio and perform sentiment analysis on \
     the transcription. Provide the transcript and a brief sentiment analysis.";

/// MIME type the audio bytes are submitted under, regardless of the
/// metadata prefix the client sent.
pub const AUDIO_MIME_TYPE: &str = "audio/webm";

/// Verbatim model output: a transcript plus a sentiment summary as free-form
/// prose. Deliberately opaque; downstream consumers must tolerate any text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    text: String,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
