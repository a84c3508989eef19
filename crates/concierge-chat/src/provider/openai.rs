use async_trait::async_trait;
use concierge_config::ChatConfig;
use concierge_core::http_client;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::ChatProvider;
use crate::error::ChatError;
use crate::types::ChatMessage;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI chat completions adapter (v1 API)
pub(crate) struct OpenAiChatProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl OpenAiChatProvider {
    pub fn from_config(config: &ChatConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), |u| u.as_str().trim_end_matches('/').to_string());

        Self {
            client: http_client(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[derive(serde::Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

#[derive(serde::Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(serde::Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[derive(serde::Deserialize)]
struct WireMessage {
    content: String,
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> crate::error::Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, turns = messages.len(), "chat completion request");

        let body = WireRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "chat provider request failed");
                ChatError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "chat provider returned error");
            return Err(ChatError::ProviderApi {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::MalformedResponse("response contained no choices".to_string()))
    }

    fn name(&self) -> &str {
        "openai"
    }
}
