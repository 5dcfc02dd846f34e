//! HTTP handlers
//!
//! - [`order`]: order relay endpoint
//! - [`health`]: liveness endpoint

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::save_order;
