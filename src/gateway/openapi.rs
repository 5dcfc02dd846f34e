//! OpenAPI documentation
//!
//! Served at `/api-docs/openapi.json` and exportable with the
//! `export_openapi` binary.

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::SaveOrderResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Relay API",
        version = "0.1.0",
        description = "Relays storefront orders to the hosted document store.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::order::save_order,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(SaveOrderResponse, HealthResponse)
    ),
    tags(
        (name = "Orders", description = "Order submission"),
        (name = "System", description = "Service status")
    )
)]
pub struct ApiDoc;
