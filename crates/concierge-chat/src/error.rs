pub type Result<T> = std::result::Result<T, ChatError>;

/// Errors from the chat provider seam
///
/// These never reach the caller: the handler swallows every provider
/// failure into the fallback reply. They exist so the adapter can say
/// what went wrong at the log line on that branch.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Could not reach the provider
    #[error("provider unreachable: {0}")]
    Connection(String),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    ProviderApi {
        status: u16,
        message: String,
    },

    /// Provider answered 200 with an unusable body
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
