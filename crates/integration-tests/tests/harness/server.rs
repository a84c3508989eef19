//! Test server wrapper that starts the gateway on a random port

use std::net::SocketAddr;

use concierge_config::Config;
use concierge_server::Server;
use tokio_util::sync::CancellationToken;

use super::mock_auth::VALID_TOKEN;

/// A running gateway instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start the gateway with the given configuration
    ///
    /// Binds to port 0 so parallel tests never collide.
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config)?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so the actual port is known
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Shared HTTP client for requests to this server
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Build an authenticated POST carrying the mock's valid token
    pub fn authed_post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(VALID_TOKEN)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
