use axum::{routing::get, Router};
use radix_core::constants::RADIX_SERVER_PREFIX_PATH;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub mod config;
mod server;

pub fn routers() -> Router {
    Router::new()
        .route("/", get(|| async { "server" }))
        .nest(RADIX_SERVER_PREFIX_PATH, server::routers())
}

pub async fn init(_cancel: CancellationToken) -> anyhow::Result<()> {
    let config = config::radix_server_config();
    info!("radix server ready on port {}", config.api_port);
    Ok(())
}
