//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use concierge_config::{
    AuthConfig, ChatConfig, ChatProviderType, Config, CorsConfig, HealthConfig, ServerConfig, SttConfig,
    SttProviderType, TtsConfig, TtsProviderType,
};
use secrecy::SecretString;

/// System prompt used by every test configuration
pub const TEST_SYSTEM_PROMPT: &str = "You are a test concierge.";

/// Builder producing a gateway config pointed at mock upstreams
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal config wired to the given auth service and provider
    pub fn new(auth_url: &str, provider_url: &str) -> Self {
        let provider_base = provider_url.parse().expect("provider url must parse");

        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                auth: AuthConfig {
                    service_url: auth_url.parse().expect("auth url must parse"),
                    timeout_seconds: 2,
                },
                chat: ChatConfig {
                    provider_type: ChatProviderType::Openai,
                    api_key: SecretString::from("sk-test"),
                    base_url: Some(provider_base),
                    model: "gpt-4".to_owned(),
                    max_tokens: 1000,
                    temperature: 0.7,
                    system_prompt: TEST_SYSTEM_PROMPT.to_owned(),
                },
                tts: TtsConfig {
                    provider_type: TtsProviderType::Openai,
                    api_key: SecretString::from("sk-test"),
                    base_url: Some(provider_url.parse().expect("provider url must parse")),
                    model: "tts-1".to_owned(),
                    voice: "alloy".to_owned(),
                },
                stt: SttConfig {
                    provider_type: SttProviderType::Openai,
                    api_key: SecretString::from("sk-test"),
                    base_url: Some(provider_url.parse().expect("provider url must parse")),
                    model: "whisper-1".to_owned(),
                    spool_dir: None,
                },
            },
        }
    }

    /// Spool uploads into the given directory instead of the system temp dir
    pub fn with_spool_dir(mut self, dir: &Path) -> Self {
        self.config.stt.spool_dir = Some(dir.to_path_buf());
        self
    }

    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.config.server.cors = Some(cors);
        self
    }

    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
