//! Configuration
//!
//! All settings come from environment variables. The Azure OpenAI variables
//! keep their conventional names; crate-specific settings live under the
//! `PAGESIFT_` prefix. Collaborator configs are optional as a group: absent
//! variables disable that collaborator, partially-set groups are an error.
//!
//! - `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_KEY`,
//!   `AZURE_OPENAI_CHAT_DEPLOYMENT`: chat-completion collaborator
//! - `OPENAI_API_VERSION` (optional): API version override
//! - `PAGESIFT_STORE_URL`, `PAGESIFT_STORE_API_KEY`,
//!   `PAGESIFT_STORE_CONTAINER`, `PAGESIFT_STORE_PARTITION_KEY`:
//!   document-store collaborator
//! - `PAGESIFT_FETCH_TIMEOUT_SECS`, `PAGESIFT_USER_AGENT`: page fetcher

use std::env;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::ConfigError;
use crate::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Default document-store container name.
const DEFAULT_STORE_CONTAINER: &str = "sessions";

/// Default partition key field in persisted records.
const DEFAULT_STORE_PARTITION_KEY: &str = "session_id";

/// Page-fetcher settings
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent header value
    pub user_agent: String,
}

/// Chat-completion collaborator settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Azure OpenAI resource endpoint
    pub endpoint: String,
    /// API key
    pub api_key: String,
    /// Chat deployment name
    pub deployment: String,
    /// API version override, when set
    pub api_version: Option<String>,
}

/// Document-store collaborator settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store base URL
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Container holding session records
    pub container: String,
    /// Record field the store partitions on
    pub partition_key: String,
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Page-fetcher settings
    pub fetch: FetchConfig,
    /// Chat collaborator; `None` when its variables are absent
    pub llm: Option<LlmConfig>,
    /// Store collaborator; `None` when its variables are absent
    pub store: Option<StoreConfig>,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let fetch = FetchConfig {
            timeout: parse_timeout(env::var("PAGESIFT_FETCH_TIMEOUT_SECS").ok())?,
            user_agent: env::var("PAGESIFT_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        };

        let llm = match env::var("AZURE_OPENAI_ENDPOINT") {
            Ok(endpoint) => Some(LlmConfig {
                endpoint,
                api_key: require("AZURE_OPENAI_KEY")?,
                deployment: require("AZURE_OPENAI_CHAT_DEPLOYMENT")?,
                api_version: env::var("OPENAI_API_VERSION").ok(),
            }),
            Err(_) => {
                info!("AZURE_OPENAI_ENDPOINT not set, LLM structuring unavailable");
                None
            }
        };

        let store = match env::var("PAGESIFT_STORE_URL") {
            Ok(base_url) => Some(StoreConfig {
                base_url,
                api_key: require("PAGESIFT_STORE_API_KEY")?,
                container: env::var("PAGESIFT_STORE_CONTAINER")
                    .unwrap_or_else(|_| DEFAULT_STORE_CONTAINER.to_string()),
                partition_key: env::var("PAGESIFT_STORE_PARTITION_KEY")
                    .unwrap_or_else(|_| DEFAULT_STORE_PARTITION_KEY.to_string()),
            }),
            Err(_) => {
                info!("PAGESIFT_STORE_URL not set, session persistence disabled");
                None
            }
        };

        Ok(Self { fetch, llm, store })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    let value = env::var(var).map_err(|_| ConfigError::MissingVar(var))?;
    if value.is_empty() {
        return Err(ConfigError::InvalidVar {
            var,
            reason: "value is empty".to_string(),
        });
    }
    Ok(value)
}

fn parse_timeout(raw: Option<String>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };

    let secs: u64 = raw.parse().map_err(|e| ConfigError::InvalidVar {
        var: "PAGESIFT_FETCH_TIMEOUT_SECS",
        reason: format!("{e}"),
    })?;

    if secs == 0 {
        return Err(ConfigError::InvalidVar {
            var: "PAGESIFT_FETCH_TIMEOUT_SECS",
            reason: "timeout must be at least one second".to_string(),
        });
    }

    if secs > 300 {
        warn!("PAGESIFT_FETCH_TIMEOUT_SECS is over five minutes");
    }

    Ok(Duration::from_secs(secs))
}
