//! Gateway types module
//!
//! - [`response`]: response bodies and fixed messages

pub mod response;

pub use response::{
    ApiResponse, METHOD_NOT_ALLOWED_MSG, ORDER_FAILED_MSG, ORDER_SAVED_MSG, SaveOrderResponse,
};
