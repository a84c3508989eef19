//! Mock OpenAI-compatible provider for integration tests
//!
//! Serves canned chat completions, speech audio, and transcripts, and
//! records what it received so tests can assert on the outbound shape.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// MP3-looking bytes served by the speech endpoint
pub const MOCK_AUDIO: &[u8] = b"ID3\x03mock-audio-bytes";

/// Mock provider with predictable responses
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockProviderState>,
}

struct MockProviderState {
    chat_count: AtomicU32,
    speech_count: AtomicU32,
    transcription_count: AtomicU32,
    /// When set, every call fails with 500 and this body
    failure_body: Option<String>,
    /// Chat completion content to return
    chat_content: String,
    /// Last chat request body, as received
    last_chat_body: Mutex<Option<serde_json::Value>>,
}

impl MockProvider {
    /// Start a mock that answers every call successfully
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None, "mock completion".to_owned()).await
    }

    /// Start a mock whose chat endpoint returns the given content
    pub async fn start_with_chat_content(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(None, content.to_owned()).await
    }

    /// Start a mock that fails every call with 500 and the given body
    pub async fn start_failing(body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some(body.to_owned()), String::new()).await
    }

    async fn start_inner(failure_body: Option<String>, chat_content: String) -> anyhow::Result<Self> {
        let state = Arc::new(MockProviderState {
            chat_count: AtomicU32::new(0),
            speech_count: AtomicU32::new(0),
            transcription_count: AtomicU32::new(0),
            failure_body,
            chat_content,
            last_chat_body: Mutex::new(None),
        });

        let app = Router::new()
            .route("/chat/completions", routing::post(handle_chat))
            .route("/audio/speech", routing::post(handle_speech))
            .route("/audio/transcriptions", routing::post(handle_transcription))
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

    pub fn chat_count(&self) -> u32 {
        self.state.chat_count.load(Ordering::Relaxed)
    }

    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// The body of the most recent chat completion request
    pub fn last_chat_body(&self) -> Option<serde_json::Value> {
        self.state.last_chat_body.lock().expect("lock").clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_chat(
    State(state): State<Arc<MockProviderState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.chat_count.fetch_add(1, Ordering::Relaxed);
    *state.last_chat_body.lock().expect("lock") = Some(body);

    if let Some(failure) = &state.failure_body {
        return (StatusCode::INTERNAL_SERVER_ERROR, failure.clone()).into_response();
    }

    Json(serde_json::json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": state.chat_content },
            "finish_reason": "stop",
        }],
        "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 },
    }))
    .into_response()
}

async fn handle_speech(State(state): State<Arc<MockProviderState>>) -> impl IntoResponse {
    state.speech_count.fetch_add(1, Ordering::Relaxed);

    if let Some(failure) = &state.failure_body {
        return (StatusCode::INTERNAL_SERVER_ERROR, failure.clone()).into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], MOCK_AUDIO.to_vec()).into_response()
}

async fn handle_transcription(
    State(state): State<Arc<MockProviderState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    let mut saw_file = false;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") && field.bytes().await.is_ok() {
            saw_file = true;
        }
    }

    if let Some(failure) = &state.failure_body {
        return (StatusCode::INTERNAL_SERVER_ERROR, failure.clone()).into_response();
    }

    if !saw_file {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "no file field" })),
        )
            .into_response();
    }

    Json(serde_json::json!({ "text": "hello from the mock transcriber" })).into_response()
}
