pub mod openai;

use async_trait::async_trait;

use crate::types::ChatMessage;

/// Trait for chat-completion provider adapters
///
/// One implementation per known upstream API generation; the adapter
/// is chosen once from configuration, never probed per request.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a completion for the assembled message list
    async fn complete(&self, messages: &[ChatMessage]) -> crate::error::Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
