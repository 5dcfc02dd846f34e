//! API Response types
//!
//! - `SaveOrderResponse`: body of the order relay endpoint
//! - `ApiResponse<T>`: `{code, msg, data}` wrapper for service endpoints

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub const ORDER_SAVED_MSG: &str = "Order saved!";
pub const ORDER_FAILED_MSG: &str = "Failed to save order.";
pub const METHOD_NOT_ALLOWED_MSG: &str = "Method Not Allowed";

// ============================================================================
// Order relay
// ============================================================================

/// Order relay response
///
/// - 200: `{ "message": "Order saved!", "result": <store result> }`
/// - 500: `{ "message": "Failed to save order." }`
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveOrderResponse {
    #[schema(example = "Order saved!")]
    pub message: String,
    /// Store result, passed through unchanged (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub result: Option<Value>,
}

impl SaveOrderResponse {
    pub fn saved(result: Value) -> Self {
        Self {
            message: ORDER_SAVED_MSG.to_string(),
            result: Some(result),
        }
    }

    /// Never carries the failure cause.
    pub fn failed() -> Self {
        Self {
            message: ORDER_FAILED_MSG.to_string(),
            result: None,
        }
    }
}

// ============================================================================
// Unified service response
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = 0)]
    pub code: i32,
    #[schema(example = "ok")]
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }
}
