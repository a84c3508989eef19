use serde::{Deserialize, Serialize};

/// Uploaded audio pulled out of the multipart form
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio bytes
    pub bytes: Vec<u8>,
    /// Original filename, defaulted when the client omits one
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
}

/// Outbound transcription response body
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionReply {
    /// Transcribed text
    pub text: String,
}
