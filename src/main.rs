//! Order Relay - server entry point
//!
//! ```text
//! ┌────────────┐  POST   ┌─────────────┐  mutate  ┌────────────────┐
//! │ Storefront │───────▶│ Order relay │────────▶│ Document store │
//! └────────────┘        └─────────────┘         └────────────────┘
//! ```
//!
//! Usage: `order_relay [--env <name>] [--port <port>]`

use std::sync::Arc;

use anyhow::Context;
use order_relay::config::AppConfig;
use order_relay::gateway;
use order_relay::{AppState, SanityClient};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config =
        AppConfig::load(&env).with_context(|| format!("Failed to load config for env {}", env))?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let _log_guard = order_relay::logging::init_logging(&app_config);
    tracing::info!("Starting order relay in {} mode", env);

    if app_config.store.write_token.is_none() {
        tracing::warn!(
            "{} is not set; the store will reject every write",
            app_config.store.token_env
        );
    }

    let client =
        SanityClient::new(&app_config.store).context("Failed to create document store client")?;
    let state = Arc::new(AppState::new(Arc::new(client)));

    gateway::run_server(&app_config.gateway, state)
        .await
        .context("Gateway server failed")?;

    tracing::info!("Order relay stopped");
    Ok(())
}
