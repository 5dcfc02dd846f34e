use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::DocumentStore;

/// Gateway application state (shared, read-only after start-up)
#[derive(Clone)]
pub struct AppState {
    /// Document store the order relay writes to
    pub store: Arc<dyn DocumentStore>,
    /// Start-up time in milliseconds
    pub started_at_ms: u64,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let started_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            store,
            started_at_ms,
        }
    }
}
