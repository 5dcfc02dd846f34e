//! Remote document store
//!
//! - [`DocumentStore`]: the write seam used by the gateway
//! - [`SanityClient`]: HTTP implementation against the hosted content API
//! - [`mutation`]: document envelope and mutation wire types

pub mod client;
pub mod error;
pub mod mutation;

pub use client::SanityClient;
pub use error::StoreError;
pub use mutation::{Document, Mutation, ORDER_DOCUMENT_TYPE, OrderPayload, TYPE_FIELD};

use async_trait::async_trait;
use serde_json::Value;

/// Write access to the document store.
///
/// One call applies the whole batch or fails; the returned value is the
/// store's result, passed through opaquely to callers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store name for logging
    fn name(&self) -> &'static str;

    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Value, StoreError>;
}
