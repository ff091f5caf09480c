//! shopfront entry point
//!
//! Wiring happens here and nowhere else: load config, set up logging,
//! build the store and the order service, hand both to the gateway.

use std::sync::Arc;

use shopfront::config::AppConfig;
use shopfront::gateway::{self, services::OrderService, state::AppState};
use shopfront::logging::init_logging;
use shopfront::store::MemoryOrderStore;

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
    let config = AppConfig::load(&env)?;
    let _guard = init_logging(&config);

    tracing::info!("shopfront starting (env: {})", env);

    let store = Arc::new(MemoryOrderStore::new());
    let order_service = Arc::new(OrderService::new(store));
    let state = Arc::new(AppState::new(order_service));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await
}
