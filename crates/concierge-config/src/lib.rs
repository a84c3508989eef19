#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod chat;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod stt;
pub mod tts;

use serde::Deserialize;

pub use auth::AuthConfig;
pub use chat::{ChatConfig, ChatProviderType};
pub use cors::{CorsConfig, OriginSet};
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use stt::{SttConfig, SttProviderType};
pub use tts::{TtsConfig, TtsProviderType};

/// Top-level gateway configuration
///
/// Loaded from a TOML file with `{{ env.VAR }}` placeholders expanded
/// before deserialization, so credentials and URLs come from the
/// environment without any process-global mutable state.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Auth service configuration
    pub auth: AuthConfig,
    /// Chat proxy configuration
    pub chat: ChatConfig,
    /// Speech synthesis configuration
    pub tts: TtsConfig,
    /// Transcription configuration
    pub stt: SttConfig,
}
