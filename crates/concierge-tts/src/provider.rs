pub mod openai;

use async_trait::async_trait;

use crate::types::SpeechAudio;

/// Trait for TTS provider adapters
///
/// One implementation per known upstream API generation, selected at
/// configuration time.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize text to audio
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechAudio>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
