//! Gateway Services Layer
//!
//! Business logic kept out of the handlers. Handlers are thin HTTP
//! adapters that delegate here and map the outcome to a response.

pub mod order;

pub use order::{OrderError, OrderOutcome, OrderService};
