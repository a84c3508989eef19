use axum::response::{IntoResponse, Response};
use concierge_core::HttpError;
use http::StatusCode;

pub type Result<T> = std::result::Result<T, SttError>;

/// Errors from transcription
#[derive(Debug, thiserror::Error)]
pub enum SttError {
    /// Multipart form lacked the required `file` field
    #[error("missing required 'file' field in multipart form")]
    MissingFile,

    /// Upload could not be read
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// Spool file could not be written or read back
    #[error("spool I/O failed: {0}")]
    Spool(#[from] std::io::Error),

    /// Could not reach the provider
    #[error("provider unreachable: {0}")]
    Connection(String),

    /// Provider rejected the transcription call; status and body are
    /// surfaced to the caller as-is
    #[error("provider returned {status}: {message}")]
    ProviderApi {
        status: u16,
        message: String,
    },

    /// Provider answered 200 with an unusable body
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            Self::Spool(_) | Self::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Connection(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApi { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingFile | Self::InvalidUpload(_) => "invalid_request_error",
            Self::Spool(_) | Self::MalformedResponse(_) => "internal_error",
            Self::Connection(_) | Self::ProviderApi { .. } => "upstream_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Spool(_) | Self::MalformedResponse(_) => "an internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        let body = axum::Json(serde_json::json!({ "detail": self.client_message() }));
        (self.status_code(), body).into_response()
    }
}
