use std::path::PathBuf;

use clap::Parser;

/// Concierge AI gateway
#[derive(Debug, Parser)]
#[command(name = "concierge", about = "Authenticated gateway for chat, speech, and transcription")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "concierge.toml", env = "CONCIERGE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CONCIERGE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
