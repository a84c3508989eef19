use serde::{Deserialize, Serialize};

/// Role of a conversation participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Persona instruction
    System,
    /// Caller message
    User,
    /// Model response
    Assistant,
}

/// One turn in a conversation
///
/// History is caller-supplied on every request and forwarded verbatim;
/// the gateway never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Inbound chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The new user message
    pub message: String,
    /// Prior turns, oldest first
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Outbound chat response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
