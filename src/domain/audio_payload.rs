use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Transport-encoded audio as received from the browser: a data-URI-style
/// string of the form `<metadata-prefix>,<base64-body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    raw: String,
}

impl AudioPayload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Decode the base64 body after the first `,` separator.
    ///
    /// The metadata prefix is not inspected; the submission MIME type is
    /// fixed regardless of what the client claims.
    pub fn decode(&self) -> Result<Vec<u8>, AudioPayloadError> {
        let (_, body) = self
            .raw
            .split_once(',')
            .ok_or(AudioPayloadError::MissingSeparator)?;

        STANDARD
            .decode(body)
            .map_err(AudioPayloadError::InvalidBase64)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioPayloadError {
    #[error("payload has no data-uri separator")]
    MissingSeparator,
    #[error("payload body is not valid base64: {0}")]
    InvalidBase64(base64::DecodeError),
}
