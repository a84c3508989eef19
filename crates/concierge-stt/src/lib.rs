#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod spool;
mod types;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Extension, Json, Router, extract::Multipart, extract::State, routing::post};
use concierge_config::{SttConfig, SttProviderType};
use concierge_core::VerifiedUser;

pub use error::{Result, SttError};
pub use types::{AudioUpload, TranscriptionReply};

use provider::{TranscriptionProvider, openai::OpenAiTranscriptionProvider};
use spool::SpoolFile;

/// Transcriber holding the configured provider adapter
pub struct Server {
    provider: Box<dyn TranscriptionProvider>,
    spool_dir: Option<PathBuf>,
}

impl Server {
    pub fn from_config(config: &SttConfig) -> Self {
        let provider: Box<dyn TranscriptionProvider> = match config.provider_type {
            SttProviderType::Openai => Box::new(OpenAiTranscriptionProvider::from_config(config)),
        };

        Self {
            provider,
            spool_dir: config.spool_dir.clone(),
        }
    }

    /// Spool the upload to disk, forward it, and clean up
    ///
    /// The spool file is removed on every path out of this function;
    /// the guard drops whether the provider call succeeds or not.
    async fn transcribe(&self, upload: AudioUpload) -> Result<TranscriptionReply> {
        let spool = SpoolFile::write(self.spool_dir.as_deref(), &upload.bytes).await?;

        let payload = AudioUpload {
            bytes: spool.read().await?,
            filename: upload.filename,
            content_type: upload.content_type,
        };

        self.provider.transcribe(payload).await
    }
}

/// Build the STT server from configuration
pub fn build_server(config: &SttConfig) -> Arc<Server> {
    Arc::new(Server::from_config(config))
}

/// Create the endpoint router for transcription
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/ai/transcribe", post(transcribe))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    Extension(user): Extension<VerifiedUser>,
    multipart: Multipart,
) -> Result<Json<TranscriptionReply>> {
    let upload = read_upload(multipart).await?;

    tracing::debug!(
        user = user.subject().unwrap_or("unknown"),
        bytes = upload.bytes.len(),
        "transcribe handler called"
    );

    let reply = server.transcribe(upload).await?;

    Ok(Json(reply))
}

/// Pull the audio file out of the multipart form
async fn read_upload(mut multipart: Multipart) -> Result<AudioUpload> {
    let mut upload: Option<AudioUpload> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("audio.wav").to_string();
        let content_type = field.content_type().unwrap_or("audio/wav").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| SttError::InvalidUpload(format!("failed to read audio data: {e}")))?
            .to_vec();

        upload = Some(AudioUpload {
            bytes,
            filename,
            content_type,
        });
    }

    upload.ok_or(SttError::MissingFile)
}
