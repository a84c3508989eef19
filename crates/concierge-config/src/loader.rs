use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_placeholders(&raw)
            .map_err(|e| anyhow::anyhow!("config placeholder expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if any subsystem carries out-of-range or
    /// empty required values
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.chat.model.is_empty() {
            anyhow::bail!("chat.model must not be empty");
        }
        if self.chat.max_tokens == 0 {
            anyhow::bail!("chat.max_tokens must be greater than 0");
        }
        if !(0.0..=2.0).contains(&self.chat.temperature) {
            anyhow::bail!("chat.temperature must be within [0.0, 2.0]");
        }
        if self.tts.model.is_empty() || self.tts.voice.is_empty() {
            anyhow::bail!("tts.model and tts.voice must not be empty");
        }
        if self.stt.model.is_empty() {
            anyhow::bail!("stt.model must not be empty");
        }
        if self.auth.timeout_seconds == 0 {
            anyhow::bail!("auth.timeout_seconds must be greater than 0");
        }
        // The router panics on paths without a leading slash, so catch
        // this at load time instead.
        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }
        Ok(())
    }
}
