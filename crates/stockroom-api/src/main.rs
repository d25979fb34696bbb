//! Stockroom server binary
//!
//! Builds one Store for the process lifetime, injects it into the router
//! state, and serves the REST API.

use clap::Parser;
use stockroom_api::{build_router, AppState, ServerConfig};
use stockroom_core::logging::{self, Profile};
use stockroom_core::Store;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    let profile = if config.log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    logging::init(profile);

    let state = AppState::new(Store::new());
    let router = build_router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    info!(%addr, "stockroom server listening");

    if let Err(e) = axum::serve(listener, router).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
