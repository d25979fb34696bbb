//! Server configuration

use clap::Parser;

/// Command-line configuration for the stockroom server
#[derive(Debug, Parser)]
#[command(name = "stockroom-server")]
#[command(about = "Stockroom - inventory administration service", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Emit JSON logs (production profile) instead of human-readable output
    #[arg(long)]
    pub log_json: bool,
}

impl ServerConfig {
    /// Bind address string
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
