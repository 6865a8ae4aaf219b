//! Chat-completion collaborator
//!
//! REST client for an Azure-OpenAI-style chat completions deployment. The
//! extracted document goes out as a single user message under a fixed
//! extraction-rules system instruction; the reply is the cleaned, structured
//! text. Deterministic settings: temperature zero, bounded response length.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::LlmError;
use crate::tokenizer::TokenEstimator;

/// Fixed system instruction sent with every structuring request.
pub const SYSTEM_PROMPT: &str = "\
You are a data extraction assistant.

Your task is to extract and structure content from raw text scraped from a public website.

Rules:
- DO NOT summarize, rewrite, or infer anything.
- Preserve ALL meaningful visible content.
- Remove all non-content elements: scripts, nav menus, cookie banners, footers, ads, accessibility or legal notices, etc.
- Group content by visible headings (e.g., OVERVIEW, EVENT DETAILS, FAQ, etc.)
- Keep line breaks, bullet points, and original wording.
- Use this format:

=== HEADING TITLE ===
(Original content...)

- Return plain text only. No HTML, JSON, or explanations.";

/// Input token budget; prompts beyond this are truncated to the prefix.
pub const MAX_INPUT_TOKENS: usize = 120_000;

/// Upper bound on completion length.
const MAX_COMPLETION_TOKENS: u32 = 4096;

/// Default API version query parameter.
pub const DEFAULT_API_VERSION: &str = "2024-03-01-preview";

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request body.
///
/// The deployment is addressed in the URL path, so no model field is sent.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens in the completion
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// A structuring reply, with truncation accounting for the caller.
#[derive(Debug, Clone)]
pub struct StructuredReply {
    /// Cleaned, structured text returned by the model
    pub content: String,
    /// Estimated tokens dropped from the input to fit the budget
    pub dropped_tokens: usize,
}

/// Chat-completion client for a single deployment.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
}

impl ChatClient {
    /// Create a client for the given endpoint, key, and deployment.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            deployment: deployment.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Override the API version query parameter.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    /// Ask the model to restructure the extracted text.
    ///
    /// Input beyond [`MAX_INPUT_TOKENS`] is cut to the budgeted prefix; the
    /// reply reports how much was dropped so the UI can warn.
    pub async fn structure_text(&self, raw_text: &str) -> Result<StructuredReply, LlmError> {
        let budgeted = TokenEstimator::truncate_to(raw_text, MAX_INPUT_TOKENS);
        if budgeted.dropped_tokens > 0 {
            warn!(
                dropped_tokens = budgeted.dropped_tokens,
                "Scraped content exceeded the input budget and was truncated"
            );
        }

        let request = ChatRequest {
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(budgeted.text)],
            temperature: 0.0,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        info!(deployment = %self.deployment, "Requesting structured completion");

        let response = self
            .http
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?
            .message
            .content
            .trim()
            .to_string();

        debug!(chars = content.len(), "Received structured completion");

        Ok(StructuredReply {
            content,
            dropped_tokens: budgeted.dropped_tokens,
        })
    }
}
