use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech synthesis configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Upstream API generation
    #[serde(rename = "type", default)]
    pub provider_type: TtsProviderType,
    /// Provider API key
    pub api_key: SecretString,
    /// Base URL override for the provider
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Voice identifier
    #[serde(default = "default_voice")]
    pub voice: String,
}

/// Supported TTS provider API generations
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// OpenAI speech API (v1, `/audio/speech`)
    #[default]
    Openai,
}

fn default_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}
