//! Error types for Pagesift
//!
//! This module provides the error type hierarchy using `thiserror`
//! for proper error handling across all components.
//!
//! The user-facing channel is a plain string prefixed with `"ERROR:"`,
//! produced by the [`Error::user_message`] adapter, so callers can branch
//! on the prefix without touching the typed hierarchy.

use thiserror::Error;

/// The main error type for Pagesift operations
#[derive(Error, Debug)]
pub enum Error {
    /// Page fetch errors (network, transport, HTTP status)
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Content extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Chat-completion collaborator errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Document-store persistence errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input URL rejected before any network call
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Page fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// Response body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// HTTP client construction failed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Content extraction errors
///
/// Extraction itself never fails on malformed HTML (the parse is
/// best-effort); these cover failures around the walk rather than in it.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Catch-all for unexpected failures during parsing/walking
    #[error("Unexpected extraction failure: {0}")]
    Unexpected(String),
}

/// Chat-completion collaborator errors
#[derive(Error, Debug)]
pub enum LlmError {
    /// Missing or invalid client configuration
    #[error("LLM configuration error: {0}")]
    Config(String),

    /// Network failure reaching the completion endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the completion endpoint
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// Response did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Response contained no completion choices
    #[error("Empty completion response")]
    EmptyResponse,
}

/// Document-store persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network failure reaching the store
    #[error("Network error: {0}")]
    Network(String),

    /// Store rejected the upsert
    #[error("Upsert rejected ({status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body returned by the store
        body: String,
    },

    /// Record could not be serialized
    #[error("Record serialization failed: {0}")]
    Serialize(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    /// An environment variable had an unusable value
    #[error("Invalid value for {var}: {reason}")]
    InvalidVar {
        /// Variable name
        var: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type alias for Pagesift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prefix carried by every user-facing error message
pub const ERROR_PREFIX: &str = "ERROR:";

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Render this error as the legacy `"ERROR:"`-prefixed display string.
    ///
    /// The UI layer shows these verbatim and branches on the prefix, so the
    /// wording mirrors the messages users already know.
    pub fn user_message(&self) -> String {
        match self {
            Error::Fetch(e) => format!("{ERROR_PREFIX} Failed to scrape the page: {e}"),
            Error::Extraction(e) => {
                format!("{ERROR_PREFIX} An unexpected error occurred during scraping: {e}")
            }
            Error::Llm(e) => format!("{ERROR_PREFIX} LLM processing failed: {e}"),
            Error::Store(e) => format!("{ERROR_PREFIX} Failed to save the session: {e}"),
            Error::InvalidUrl(_) => {
                format!("{ERROR_PREFIX} Please enter a valid URL starting with http or https.")
            }
            other => format!("{ERROR_PREFIX} {other}"),
        }
    }
}
