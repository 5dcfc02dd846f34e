//! HTTP client for the hosted content API
//!
//! Mutations go to `POST {base}/v{api_version}/data/mutate/{dataset}` with a
//! bearer token. `use_cdn` selects the cached read host and must stay off
//! for writes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::error::StoreError;
use super::mutation::Mutation;
use super::DocumentStore;
use crate::config::{StoreConfig, WriteToken};

/// Ask for the affected ids and wait until the write is queryable.
const MUTATE_QUERY: [(&str, &str); 2] = [("returnIds", "true"), ("visibility", "sync")];

/// Content API client bound to one project and dataset.
pub struct SanityClient {
    http: reqwest::Client,
    mutate_url: String,
    token: Option<WriteToken>,
}

#[derive(Serialize)]
struct MutateRequest<'a> {
    mutations: &'a [Mutation],
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MutateResponse {
    #[serde(default)]
    transaction_id: Option<String>,
    /// Kept as raw values; entries are passed back untouched.
    #[serde(default)]
    results: Vec<Value>,
}

impl MutateResponse {
    /// `{transactionId, results, documentIds}`, one id per result (`null` when absent).
    fn into_result(self) -> Value {
        let document_ids: Vec<Value> = self
            .results
            .iter()
            .map(|r| r.get("id").cloned().unwrap_or(Value::Null))
            .collect();
        json!({
            "transactionId": self.transaction_id,
            "results": self.results,
            "documentIds": document_ids,
        })
    }
}

impl SanityClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Client(e.to_string()))?;

        let mutate_url = format!(
            "{}/v{}/data/mutate/{}",
            Self::base_url(config),
            config.api_version,
            config.dataset
        );

        info!(
            "Content API client for project {} dataset {} (token configured: {})",
            config.project_id,
            config.dataset,
            config.write_token.is_some()
        );

        Ok(Self {
            http,
            mutate_url,
            token: config.write_token.clone(),
        })
    }

    pub fn base_url(config: &StoreConfig) -> String {
        if let Some(ref host) = config.api_host {
            return host.trim_end_matches('/').to_string();
        }
        let domain = if config.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!("https://{}.{}", config.project_id, domain)
    }
}

#[async_trait]
impl DocumentStore for SanityClient {
    fn name(&self) -> &'static str {
        "sanity"
    }

    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Value, StoreError> {
        let mut request = self
            .http
            .post(&self.mutate_url)
            .query(&MUTATE_QUERY)
            .json(&MutateRequest {
                mutations: &mutations,
            });
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token.expose());
        }

        let response = request.send().await.map_err(StoreError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let reply: MutateResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        debug!(
            "Transaction {} committed with {} result(s)",
            reply.transaction_id.as_deref().unwrap_or("-"),
            reply.results.len()
        );

        Ok(reply.into_result())
    }
}
