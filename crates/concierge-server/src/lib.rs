#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod auth;
mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use concierge_auth::TokenVerifier;
use concierge_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled gateway with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the gateway from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the token verifier cannot be constructed
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5003)));

        let chat_state = concierge_chat::build_server(&config.chat);
        let tts_state = concierge_tts::build_server(&config.tts);
        let stt_state = concierge_stt::build_server(&config.stt);

        let mut app = Router::new().route("/ai", axum::routing::get(health::root_handler));

        if config.server.health.enabled {
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler),
            );
        }

        app = app.merge(concierge_chat::endpoint_router().with_state(chat_state));
        app = app.merge(concierge_tts::endpoint_router().with_state(tts_state));
        app = app.merge(concierge_stt::endpoint_router().with_state(stt_state));
        app = app.merge(concierge_vehicle::endpoint_router());

        // Middleware, innermost first: authentication runs closest to
        // the handlers so CORS preflights and tracing are never gated
        // on a credential.
        let verifier = TokenVerifier::new(&config.auth)?;
        app = app.layer(axum::middleware::from_fn(move |request, next| {
            let verifier = verifier.clone();
            async move { auth::auth_middleware(verifier, request, next).await }
        }));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "gateway listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
