//! Order placement handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use super::super::state::AppState;
use super::super::types::{ErrorResponse, OrderRequest, OrderResponse};
use super::helpers;

/// Place order endpoint
///
/// POST /api/orders/place
#[utoipa::path(
    post,
    path = "/api/orders/place",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse, content_type = "application/json"),
        (status = 400, description = "Invalid order request", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), (StatusCode, Json<ErrorResponse>)> {
    tracing::info!(
        customer = %req.customer_name,
        items = req.items.len(),
        "place order received"
    );

    // The request goes to the service unmodified; all validation and
    // stamping happens there.
    let response = state
        .order_service
        .place_order(req)
        .await
        .map_err(helpers::service_error)?;

    Ok((StatusCode::CREATED, Json(response)))
}
