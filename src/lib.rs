//! Order Relay
//!
//! Accepts storefront orders over HTTP and writes each one to a hosted
//! document store as a single `create` mutation.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration plus the write token from the environment
//! - [`logging`] - tracing subscriber setup
//! - [`store`] - document store seam and its HTTP client
//! - [`gateway`] - axum router, handlers and the order service

pub mod config;
pub mod gateway;
pub mod logging;
pub mod store;

pub use config::{AppConfig, ConfigError, StoreConfig, WriteToken};
pub use gateway::state::AppState;
pub use store::{Document, DocumentStore, Mutation, OrderPayload, SanityClient, StoreError};
