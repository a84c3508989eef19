use http::StatusCode;
use concierge_core::HttpError;

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Request carried neither a bearer header nor a token cookie
    #[error("no credentials on request")]
    MissingCredentials,

    /// Auth service rejected the token
    #[error("token rejected by auth service")]
    InvalidToken,

    /// Auth service could not be reached
    #[error("auth service unreachable: {0}")]
    ServiceUnavailable(String),

    /// Auth service answered 200 with a body the gateway cannot read
    #[error("malformed verify response: {0}")]
    MalformedResponse(String),
}

impl HttpError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingCredentials | Self::InvalidToken => "authentication_error",
            Self::ServiceUnavailable(_) => "upstream_unavailable",
            Self::MalformedResponse(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MissingCredentials => "Invalid authentication credentials".to_string(),
            Self::InvalidToken => "Invalid or expired token".to_string(),
            Self::ServiceUnavailable(_) => "Auth service unavailable".to_string(),
            Self::MalformedResponse(_) => "an internal error occurred".to_string(),
        }
    }
}
