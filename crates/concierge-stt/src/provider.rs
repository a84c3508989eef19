pub mod openai;

use async_trait::async_trait;

use crate::types::{AudioUpload, TranscriptionReply};

/// Trait for STT provider adapters
///
/// One implementation per known upstream API generation, selected at
/// configuration time.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Transcribe an audio payload
    async fn transcribe(&self, upload: AudioUpload) -> crate::error::Result<TranscriptionReply>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
