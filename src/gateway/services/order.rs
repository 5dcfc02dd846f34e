//! Order Service - forwards a storefront order to the document store
//!
//! Returns an explicit outcome; the HTTP handler decides the status code.

use serde_json::Value;
use thiserror::Error;

use crate::store::{Document, DocumentStore, Mutation, OrderPayload, StoreError};

/// Order service error
#[derive(Debug, Error)]
pub enum OrderError {
    /// Body could not be read as an order payload
    #[error("Invalid order payload: {0}")]
    Payload(String),
    /// Store refused or could not be reached
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Store result on success, cause on failure.
pub type OrderOutcome = Result<Value, OrderError>;

/// Order Service - one create mutation per submitted order
pub struct OrderService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> OrderService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Wrap the raw body in an order envelope and submit it.
    pub async fn save_order(&self, body: &[u8]) -> OrderOutcome {
        let payload = parse_payload(body)?;
        tracing::debug!("[ORDER] Payload with {} field(s)", payload.len());

        let mutations = build_mutations(payload);
        for mutation in &mutations {
            tracing::debug!(
                "[ORDER] Submitting {} of {} document",
                mutation.operation(),
                mutation.doc_type().unwrap_or("?")
            );
        }
        let result = self.store.mutate(mutations).await?;

        tracing::info!("[ORDER] Saved via {}", self.store.name());
        Ok(result)
    }
}

/// Read the body as an open field map.
///
/// Only invalid JSON is rejected. Other values merge the way an object
/// spread would:
/// - object: its fields
/// - array: elements keyed by index (`"0"`, `"1"`, ...)
/// - string: characters keyed by index
/// - empty body, `null`, booleans, numbers: no fields
pub fn parse_payload(body: &[u8]) -> Result<OrderPayload, OrderError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(OrderPayload::new());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| OrderError::Payload(e.to_string()))?;

    Ok(match value {
        Value::Object(fields) => fields,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => OrderPayload::new(),
    })
}

/// Exactly one `create` for the order document.
pub fn build_mutations(payload: OrderPayload) -> Vec<Mutation> {
    vec![Mutation::Create(Document::order(payload))]
}
