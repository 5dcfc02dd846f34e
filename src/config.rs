use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use thiserror::Error;

/// Project hosting the order documents. Not a secret.
pub const DEFAULT_PROJECT_ID: &str = "1c72zgt0";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_TOKEN_ENV: &str = "SANITY_WRITE_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Remote document store connection settings.
///
/// `write_token` is never read from YAML; it is filled from the environment
/// variable named by `token_env` when the config is loaded.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Base URL override (e.g. a local proxy). Derived from `project_id` when unset.
    #[serde(default)]
    pub api_host: Option<String>,
    pub timeout_secs: u64,
    pub token_env: String,
    #[serde(skip)]
    pub write_token: Option<WriteToken>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: "1".to_string(),
            use_cdn: false,
            api_host: None,
            timeout_secs: 30,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            write_token: None,
        }
    }
}

/// Secret write credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct WriteToken(String);

impl WriteToken {
    /// Empty strings count as "no token".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WriteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriteToken(***)")
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml` and pick up the write token from the process environment.
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        Self::from_yaml(&content, |name| std::env::var(name).ok())
    }

    /// Parse YAML and resolve the token through `lookup` (env var name -> value).
    pub fn from_yaml<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: AppConfig = serde_yaml::from_str(content)?;
        config.store.write_token = lookup(&config.store.token_env).and_then(WriteToken::new);
        Ok(config)
    }
}
