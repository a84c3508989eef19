use serde::Deserialize;

/// Inbound synthesis request body
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize
    pub text: String,
}

/// Raw audio returned by a provider
pub struct SpeechAudio {
    /// Audio bytes (MP3 on the happy path)
    pub audio: Vec<u8>,
    /// Content type reported by the provider
    pub content_type: String,
}

impl SpeechAudio {
    /// Convert into an HTTP response streaming the bytes as a download
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .header(
                http::header::CONTENT_DISPOSITION,
                "attachment; filename=response.mp3",
            )
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .expect("empty response must build")
            })
    }
}
