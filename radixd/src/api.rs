use axum::{routing::get, Router};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config;

pub(crate) async fn start(cancel: CancellationToken) -> anyhow::Result<()> {
    let config = config::radix_config();

    let app = Router::new()
        .route("/healthz", get(|| async { "UP" }))
        .merge(radix_server::routers())
        .layer(tower::ServiceBuilder::new().layer(CorsLayer::permissive()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.api_port)).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("api server shutdown");
                },
            }
        })
        .await
        .map_err(|e| e.into())
}
