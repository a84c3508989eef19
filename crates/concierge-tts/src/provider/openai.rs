use async_trait::async_trait;
use concierge_config::TtsConfig;
use concierge_core::http_client;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::SpeechProvider;
use crate::error::TtsError;
use crate::types::SpeechAudio;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI speech adapter (v1 API, `/audio/speech`)
pub(crate) struct OpenAiSpeechProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    voice: String,
}

impl OpenAiSpeechProvider {
    pub fn from_config(config: &TtsConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |u| u.as_str().trim_end_matches('/').to_string());

        Self {
            client: http_client(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            voice: config.voice.clone(),
        }
    }
}

#[derive(serde::Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

#[async_trait]
impl SpeechProvider for OpenAiSpeechProvider {
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechAudio> {
        let url = format!("{}/audio/speech", self.base_url);

        tracing::debug!(model = %self.model, voice = %self.voice, input_len = text.len(), "speech request");

        let body = WireRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "speech provider request failed");
                TtsError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%status, "speech provider returned error");
            return Err(TtsError::ProviderApi {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::Internal(format!("failed to read audio body: {e}")))?;

        tracing::debug!(bytes = audio.len(), "speech synthesis complete");

        Ok(SpeechAudio {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}
