use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Store rejected mutation with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Failed to parse store response: {0}")]
    Decode(String),
}
