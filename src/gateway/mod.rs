pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Json, Router,
    routing::{any, get},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;

use crate::config::GatewayConfig;
use openapi::ApiDoc;
use state::AppState;

/// Path the storefront posts orders to.
pub const SAVE_ORDER_PATH: &str = "/api/save-order";

/// Build the gateway router.
///
/// The order route accepts every method so the handler can answer non-POST
/// requests with its own 405 body.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(SAVE_ORDER_PATH, any(handlers::save_order))
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Order relay listening on {}", listener.local_addr()?);

    serve(listener, state).await
}

/// Serve on an already bound listener.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
