//! OpenAPI / Swagger UI Documentation
//!
//! Auto-generated OpenAPI 3.0 documentation for the shopfront API.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    OrderItemRequest, OrderRequest, OrderResponse,
    response::{ErrorDetail, ErrorResponse, OrderItemResponse},
};
use crate::models::OrderStatus;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopfront Order API",
        version = "1.0.0",
        description = "E-commerce order placement backend: place orders and list them.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::place_order,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
    ),
    components(
        schemas(
            HealthResponse,
            OrderRequest,
            OrderItemRequest,
            OrderResponse,
            OrderItemResponse,
            OrderStatus,
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "Orders", description = "Order placement and queries"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;
