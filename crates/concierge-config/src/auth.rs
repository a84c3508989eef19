use serde::Deserialize;
use url::Url;

/// Auth service configuration
///
/// The gateway never inspects tokens locally; every request is
/// verified against this service's `/verify` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Base URL of the auth service (e.g. `http://localhost:5002/api/auth`)
    pub service_url: Url,

    /// Timeout for verify calls in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

const fn default_timeout_seconds() -> u64 {
    5
}
