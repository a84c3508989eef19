use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat proxy configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Upstream API generation
    #[serde(rename = "type", default)]
    pub provider_type: ChatProviderType,
    /// Provider API key
    pub api_key: SecretString,
    /// Base URL override for the provider
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Persona prepended to every conversation
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

/// Supported chat provider API generations
///
/// One adapter per known upstream generation, selected here once
/// instead of being probed per request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatProviderType {
    /// OpenAI-compatible chat completions API (v1)
    #[default]
    Openai,
}

fn default_model() -> String {
    "gpt-4".to_string()
}

const fn default_max_tokens() -> u32 {
    1000
}

const fn default_temperature() -> f64 {
    0.7
}

fn default_system_prompt() -> String {
    "You are an in-car AI concierge for a premium motoring group. \
     Answer questions about the vehicle, journeys, and services in a \
     warm, concise, and professional tone."
        .to_string()
}
