use axum::response::{IntoResponse, Response};
use concierge_core::HttpError;
use http::StatusCode;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors from speech synthesis
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// Request text was empty or whitespace
    #[error("text must not be empty")]
    EmptyInput,

    /// Could not reach the provider
    #[error("provider unreachable: {0}")]
    Connection(String),

    /// Provider rejected the synthesis call; status and body are
    /// surfaced to the caller as-is
    #[error("provider returned {status}: {message}")]
    ProviderApi {
        status: u16,
        message: String,
    },

    /// Anything else
    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput => StatusCode::BAD_REQUEST,
            Self::Connection(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApi { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::EmptyInput => "invalid_request_error",
            Self::Connection(_) | Self::ProviderApi { .. } => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "an internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        let body = axum::Json(serde_json::json!({ "detail": self.client_message() }));
        (self.status_code(), body).into_response()
    }
}
