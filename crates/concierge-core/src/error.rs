use http::StatusCode;

/// Trait for domain errors that map onto HTTP responses
///
/// Each feature crate implements this for its error enum. The handler
/// layer turns the result into a `{"detail": ...}` JSON body, keeping
/// the domain errors themselves free of axum types.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error category (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
