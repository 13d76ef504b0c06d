//! Sleep calculator HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sleepcalc-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides `sleepcalc.toml`, default: 0.0.0.0)
//! - `PORT`: Server port (overrides `sleepcalc.toml`, default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sleepcalc::config::ServerConfig;
use sleepcalc::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting sleep calculator server");

    let config = ServerConfig::load()?;
    let addr = config.bind_addr()?;

    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Sleep chart: http://{}/v1/age-brackets", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
