use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Transcription configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Upstream API generation
    #[serde(rename = "type", default)]
    pub provider_type: SttProviderType,
    /// Provider API key
    pub api_key: SecretString,
    /// Base URL override for the provider
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Directory for transient upload spool files; system temp dir when absent
    #[serde(default)]
    pub spool_dir: Option<PathBuf>,
}

/// Supported STT provider API generations
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SttProviderType {
    /// OpenAI Whisper API (v1, `/audio/transcriptions`)
    #[default]
    Openai,
}

fn default_model() -> String {
    "whisper-1".to_string()
}
