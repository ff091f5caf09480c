//! HTTP gateway: route table, handlers, DTOs and shared state
//!
//! The gateway is a thin adapter in front of [`services::OrderService`]:
//! it parses requests, delegates, and shapes responses with fixed HTTP
//! status codes. It owns no mutable state of its own.

pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the gateway route table
///
/// Routes are mapped once at startup; handlers receive the shared state
/// through axum's `State` extractor.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/orders/place", post(handlers::place_order))
        .route("/orders", get(handlers::list_orders))
        .route("/orders/{order_id}", get(handlers::get_order))
        .route("/health", get(handlers::health_check));

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
///
/// Blocks until the server stops.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
