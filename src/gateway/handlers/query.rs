//! Order query handlers (list, single lookup)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ErrorResponse, OrderResponse, error_codes};
use super::helpers;

/// List orders endpoint
///
/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders in placement order", body = [OrderResponse], content_type = "application/json"),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<OrderResponse>>), (StatusCode, Json<ErrorResponse>)> {
    let orders = state
        .order_service
        .list_orders()
        .await
        .map_err(helpers::service_error)?;

    // Empty store means an empty array, not an error
    Ok((StatusCode::OK, Json(orders)))
}

/// Get single order by ID
///
/// GET /api/orders/{order_id}
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = OrderResponse, content_type = "application/json"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<(StatusCode, Json<OrderResponse>), (StatusCode, Json<ErrorResponse>)> {
    match state
        .order_service
        .get_order(&order_id)
        .await
        .map_err(helpers::service_error)?
    {
        Some(order) => Ok((StatusCode::OK, Json(order))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                error_codes::ORDER_NOT_FOUND,
                "Order not found",
            )),
        )),
    }
}
