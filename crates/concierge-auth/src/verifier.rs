use std::time::Duration;

use concierge_config::AuthConfig;
use concierge_core::VerifiedUser;

use crate::AuthError;

/// Verifies tokens against the remote auth service
///
/// Every inbound request pays for a verify round-trip; results are
/// deliberately not cached so revocations take effect immediately.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    http: reqwest::Client,
    verify_url: String,
}

impl TokenVerifier {
    /// Build a verifier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &AuthConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let base = config.service_url.as_str().trim_end_matches('/');
        let verify_url = format!("{base}/verify");

        Ok(Self { http, verify_url })
    }

    /// Verify a credential and return the caller's claims
    ///
    /// The auth service expects the token as a `token` cookie rather
    /// than a bearer header; that is its protocol, not an oversight.
    pub async fn verify(&self, token: &str) -> Result<VerifiedUser, AuthError> {
        let response = self
            .http
            .get(&self.verify_url)
            .header(http::header::COOKIE, format!("token={token}"))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "auth service unreachable");
                AuthError::ServiceUnavailable(e.to_string())
            })?;

        // The upstream contract is exact: anything but 200 means the
        // token is not valid, including other 2xx statuses.
        if response.status() != http::StatusCode::OK {
            tracing::debug!(status = %response.status(), "auth service rejected token");
            return Err(AuthError::InvalidToken);
        }

        let claims = response
            .json::<serde_json::Map<String, serde_json::Value>>()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        Ok(VerifiedUser::new(claims))
    }
}
