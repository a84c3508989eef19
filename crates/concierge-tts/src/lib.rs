#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod types;

use std::sync::Arc;

use axum::{Extension, Json, Router, extract::State, routing::post};
use concierge_config::{TtsConfig, TtsProviderType};
use concierge_core::VerifiedUser;

pub use error::{Result, TtsError};
pub use types::{SpeechAudio, SpeechRequest};

use provider::{SpeechProvider, openai::OpenAiSpeechProvider};

/// Speech synthesizer holding the configured provider adapter
pub struct Server {
    provider: Box<dyn SpeechProvider>,
}

impl Server {
    pub fn from_config(config: &TtsConfig) -> Self {
        let provider: Box<dyn SpeechProvider> = match config.provider_type {
            TtsProviderType::Openai => Box::new(OpenAiSpeechProvider::from_config(config)),
        };

        Self { provider }
    }
}

/// Build the TTS server from configuration
pub fn build_server(config: &TtsConfig) -> Arc<Server> {
    Arc::new(Server::from_config(config))
}

/// Create the endpoint router for speech synthesis
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/ai/synthesize", post(synthesize))
}

/// Handle synthesis requests
///
/// Empty text is rejected before any upstream call is made.
async fn synthesize(
    State(server): State<Arc<Server>>,
    Extension(user): Extension<VerifiedUser>,
    Json(request): Json<SpeechRequest>,
) -> Result<axum::response::Response> {
    if request.text.trim().is_empty() {
        return Err(TtsError::EmptyInput);
    }

    tracing::debug!(
        user = user.subject().unwrap_or("unknown"),
        input_len = request.text.len(),
        "synthesize handler called"
    );

    let audio = server.provider.synthesize(&request.text).await?;

    Ok(audio.into_response())
}
