use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use concierge_auth::{AuthError, TokenVerifier, extract_token};
use concierge_core::HttpError;

/// Whether a route sits behind authentication
///
/// The chat, synthesis, and transcription endpoints require a verified
/// caller; the root status, health, and vehicle stub do not.
fn requires_auth(method: &http::Method, path: &str) -> bool {
    method == http::Method::POST && matches!(path, "/ai" | "/ai/synthesize" | "/ai/transcribe")
}

/// Authenticate protected requests against the auth service
///
/// Extracts the credential, verifies it remotely, and inserts the
/// resulting `VerifiedUser` into request extensions so handlers can
/// rely on it. Runs before any handler logic on protected routes.
pub async fn auth_middleware(verifier: TokenVerifier, mut request: Request, next: Next) -> Response {
    if !requires_auth(request.method(), request.uri().path()) {
        return next.run(request).await;
    }

    let Some(token) = extract_token(request.headers()) else {
        return reject(&AuthError::MissingCredentials);
    };

    match verifier.verify(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(error = %e, "authentication failed");
            reject(&e)
        }
    }
}

/// Render an auth failure in the gateway's error shape
fn reject(error: &AuthError) -> Response {
    let body = axum::Json(serde_json::json!({ "detail": error.client_message() }));
    (error.status_code(), body).into_response()
}
