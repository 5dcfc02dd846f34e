//! Mutation and document envelope types
//!
//! The store expects a list of mutations, each one an object keyed by the
//! operation name:
//!
//! ```text
//! [{ "create": { "_type": "order", "item": "Widget", "qty": 2 } }]
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

/// Discriminator field required on every stored document.
pub const TYPE_FIELD: &str = "_type";

/// Document type for storefront orders.
pub const ORDER_DOCUMENT_TYPE: &str = "order";

/// Caller-supplied order fields, forwarded verbatim.
pub type OrderPayload = Map<String, Value>;

/// A payload wrapped with its document-type discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Build `payload ∪ {_type: doc_type}`.
    ///
    /// The discriminator is applied last, so a `_type` key in the payload is
    /// always replaced.
    pub fn envelope(doc_type: &str, payload: OrderPayload) -> Self {
        let mut fields = payload;
        fields.insert(TYPE_FIELD.to_string(), Value::String(doc_type.to_string()));
        Self(fields)
    }

    pub fn order(payload: OrderPayload) -> Self {
        Self::envelope(ORDER_DOCUMENT_TYPE, payload)
    }

    pub fn doc_type(&self) -> Option<&str> {
        self.0.get(TYPE_FIELD).and_then(Value::as_str)
    }

    #[cfg(test)]
    pub(crate) fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A single write operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    Create(Document),
}

impl Mutation {
    pub fn operation(&self) -> &'static str {
        match self {
            Mutation::Create(_) => "create",
        }
    }

    /// Document type of the target document.
    pub fn doc_type(&self) -> Option<&str> {
        match self {
            Mutation::Create(doc) => doc.doc_type(),
        }
    }
}
