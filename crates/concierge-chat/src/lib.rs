#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod types;

use std::sync::Arc;

use axum::{Extension, Json, Router, extract::State, routing::post};
use concierge_config::{ChatConfig, ChatProviderType};
use concierge_core::VerifiedUser;

pub use error::{ChatError, Result};
pub use types::{ChatMessage, ChatReply, ChatRequest, Role};

use provider::{ChatProvider, openai::OpenAiChatProvider};

/// Fixed reply returned when the upstream provider fails
///
/// Product decision: chat never surfaces upstream errors to the caller.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting to my knowledge base. Please try again in a moment.";

/// Chat proxy holding the configured provider adapter
pub struct Server {
    provider: Box<dyn ChatProvider>,
    system_prompt: String,
}

impl Server {
    pub fn from_config(config: &ChatConfig) -> Self {
        let provider: Box<dyn ChatProvider> = match config.provider_type {
            ChatProviderType::Openai => Box::new(OpenAiChatProvider::from_config(config)),
        };

        Self {
            provider,
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Assemble the outbound message list
    ///
    /// Order is fixed: persona system message, caller history verbatim,
    /// then the new user message.
    fn assemble(&self, request: &ChatRequest) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(ChatMessage::new(Role::System, self.system_prompt.clone()));
        messages.extend(request.history.iter().cloned());
        messages.push(ChatMessage::new(Role::User, request.message.clone()));
        messages
    }
}

/// Build the chat server from configuration
pub fn build_server(config: &ChatConfig) -> Arc<Server> {
    Arc::new(Server::from_config(config))
}

/// Create the endpoint router for chat
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/ai", post(chat))
}

/// Handle chat requests
///
/// Upstream failures are logged and replaced by the fallback reply;
/// the endpoint answers 200 either way.
async fn chat(
    State(server): State<Arc<Server>>,
    Extension(user): Extension<VerifiedUser>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatReply> {
    tracing::debug!(user = user.subject().unwrap_or("unknown"), "chat handler called");

    let messages = server.assemble(&request);

    let response = match server.provider.complete(&messages).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            tracing::warn!(provider = server.provider.name(), error = %e, "chat upstream failed, returning fallback");
            FALLBACK_REPLY.to_string()
        }
    };

    Json(ChatReply { response })
}
