use async_trait::async_trait;
use concierge_config::SttConfig;
use concierge_core::http_client;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::TranscriptionProvider;
use crate::error::SttError;
use crate::types::{AudioUpload, TranscriptionReply};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI Whisper adapter (v1 API, `/audio/transcriptions`)
pub(crate) struct OpenAiTranscriptionProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiTranscriptionProvider {
    pub fn from_config(config: &SttConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |u| u.as_str().trim_end_matches('/').to_string());

        Self {
            client: http_client(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[derive(serde::Deserialize)]
struct WireResponse {
    text: String,
}

#[async_trait]
impl TranscriptionProvider for OpenAiTranscriptionProvider {
    async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionReply> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(
            model = %self.model,
            bytes = upload.bytes.len(),
            filename = %upload.filename,
            "transcription request"
        );

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(upload.bytes)
                    .file_name(upload.filename)
                    .mime_str(&upload.content_type)
                    .map_err(|e| SttError::InvalidUpload(format!("invalid content type: {e}")))?,
            )
            .text("model", self.model.clone());

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "transcription provider request failed");
                SttError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%status, "transcription provider returned error");
            return Err(SttError::ProviderApi {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| SttError::MalformedResponse(e.to_string()))?;

        tracing::debug!("transcription complete");

        Ok(TranscriptionReply { text: parsed.text })
    }

    fn name(&self) -> &str {
        "openai"
    }
}
