//! Mock auth service for integration tests
//!
//! Implements the `/verify` endpoint the gateway calls, expecting the
//! credential as a `token` cookie.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// The one token the mock accepts
pub const VALID_TOKEN: &str = "tok-valid";

/// Mock auth service accepting a single well-known token
pub struct MockAuth {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockAuthState>,
}

struct MockAuthState {
    verify_count: AtomicU32,
    /// When set, every verify call answers with this status and an
    /// empty body instead of checking the token
    forced_status: Option<StatusCode>,
}

impl MockAuth {
    /// Start a mock that accepts `VALID_TOKEN` and rejects the rest
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that rejects every token
    pub async fn start_rejecting() -> anyhow::Result<Self> {
        Self::start_inner(Some(StatusCode::UNAUTHORIZED)).await
    }

    /// Start a mock whose verify endpoint always answers with `status`
    pub async fn start_with_status(status: StatusCode) -> anyhow::Result<Self> {
        Self::start_inner(Some(status)).await
    }

    async fn start_inner(forced_status: Option<StatusCode>) -> anyhow::Result<Self> {
        let state = Arc::new(MockAuthState {
            verify_count: AtomicU32::new(0),
            forced_status,
        });

        let app = Router::new()
            .route("/verify", routing::get(handle_verify))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL the gateway should be configured with
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of verify calls received so far
    pub fn verify_count(&self) -> u32 {
        self.state.verify_count.load(Ordering::Relaxed)
    }

    /// A URL where nothing is listening
    ///
    /// Binds a listener to grab a free port and drops it, so connecting
    /// fails with a refusal rather than a timeout.
    pub fn dead_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind for dead url");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{addr}")
    }
}

impl Drop for MockAuth {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_verify(State(state): State<Arc<MockAuthState>>, headers: HeaderMap) -> impl IntoResponse {
    state.verify_count.fetch_add(1, Ordering::Relaxed);

    if let Some(status) = state.forced_status {
        return status.into_response();
    }

    // The upstream contract is a `token` cookie; bearer headers are
    // deliberately ignored here.
    let token = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| {
            raw.split(';')
                .filter_map(|pair| pair.trim().split_once('='))
                .find(|(key, _)| *key == "token")
                .map(|(_, value)| value.to_owned())
        });

    if token.as_deref() != Some(VALID_TOKEN) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "detail": "invalid session" })),
        )
            .into_response();
    }

    Json(serde_json::json!({
        "id": "u-1",
        "email": "driver@example.com",
        "role": "driver",
    }))
    .into_response()
}
