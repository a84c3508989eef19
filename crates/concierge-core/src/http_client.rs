use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client for outbound provider calls
///
/// Reuses one connection pool across the chat, TTS, and STT crates and
/// puts an upper bound on every outbound call. Synthesis of long inputs
/// can take a while, hence the generous overall timeout.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(Duration::from_secs(120))
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .build()
                .expect("default HTTP client must build")
        })
        .clone()
}
