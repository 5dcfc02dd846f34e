//! Order relay handler

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::services::{OrderError, OrderService};
use super::super::state::AppState;
use super::super::types::{METHOD_NOT_ALLOWED_MSG, SaveOrderResponse};

/// Largest order body read from the wire.
pub const MAX_ORDER_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Save order endpoint
///
/// Routed for every method: anything but POST is answered here with a
/// plain-text 405 before the body or the store are touched. Every failure
/// after that, including an unreadable or oversized body, is a generic 500;
/// the cause is only logged.
#[utoipa::path(
    post,
    path = "/api/save-order",
    request_body(content = String, description = "Order fields as a JSON object", content_type = "application/json"),
    responses(
        (status = 200, description = "Order saved", body = SaveOrderResponse, content_type = "application/json"),
        (status = 405, description = "Method Not Allowed", content_type = "text/plain"),
        (status = 500, description = "Failed to save order", body = SaveOrderResponse, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn save_order(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if request.method() != Method::POST {
        tracing::debug!("[ORDER] Rejected {} request", request.method());
        return (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MSG).into_response();
    }

    let outcome = match read_body(request).await {
        Ok(body) => OrderService::new(state.store.as_ref()).save_order(&body).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => (StatusCode::OK, Json(SaveOrderResponse::saved(result))).into_response(),
        Err(e) => {
            tracing::error!("[ORDER] Error saving order to {}: {}", state.store.name(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveOrderResponse::failed()),
            )
                .into_response()
        }
    }
}

async fn read_body(request: Request) -> Result<Bytes, OrderError> {
    axum::body::to_bytes(request.into_body(), MAX_ORDER_BODY_BYTES)
        .await
        .map_err(|e| OrderError::Payload(format!("failed to read body: {}", e)))
}
