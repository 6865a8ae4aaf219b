//! Extraction pipeline
//!
//! Orchestrates one URL through validate, fetch, extract, LLM structuring,
//! and session recording. Every failure is converted to the prefixed
//! user-facing message at this boundary; the bot turn records exactly the
//! text shown to the user, success or failure.

use tracing::{debug, instrument};
use url::Url;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::extraction::{ContentExtractor, StructuredContent};
use crate::fetch::PageFetcher;
use crate::llm::ChatClient;
use crate::session::SessionContext;
use crate::store::SessionStore;

/// Result of processing one URL, already rendered for display
#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    /// The page was extracted (and structured, when an LLM is wired in)
    Structured {
        /// Final text shown and exported to the user
        content: String,
        /// Estimated tokens dropped to fit the LLM input budget
        dropped_tokens: usize,
    },
    /// Something failed; the message carries the `"ERROR:"` prefix
    Failed {
        /// User-facing error message
        message: String,
    },
}

impl ProcessOutcome {
    /// The text a user sees for this outcome.
    pub fn display_text(&self) -> &str {
        match self {
            ProcessOutcome::Structured { content, .. } => content,
            ProcessOutcome::Failed { message } => message,
        }
    }

    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, ProcessOutcome::Failed { .. })
    }
}

/// One-URL extraction pipeline over the configured collaborators
pub struct Pipeline {
    fetcher: PageFetcher,
    llm: Option<ChatClient>,
    store: Option<SessionStore>,
}

impl Pipeline {
    /// Assemble a pipeline from parts.
    pub fn new(fetcher: PageFetcher, llm: Option<ChatClient>, store: Option<SessionStore>) -> Self {
        Self {
            fetcher,
            llm,
            store,
        }
    }

    /// Assemble a pipeline from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = PageFetcher::new(config.fetch.timeout, &config.fetch.user_agent)?;

        let llm = config.llm.as_ref().map(|c| {
            let client = ChatClient::new(&c.endpoint, &c.api_key, &c.deployment);
            match &c.api_version {
                Some(version) => client.with_api_version(version),
                None => client,
            }
        });

        let store = config
            .store
            .as_ref()
            .map(|c| SessionStore::new(&c.base_url, &c.api_key, &c.container, &c.partition_key));

        Ok(Self::new(fetcher, llm, store))
    }

    /// Reject URLs without an http/https scheme before any network call.
    pub fn validate_url(url: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(Error::InvalidUrl(url.to_string())),
        }
    }

    /// Fetch a page and extract its structured document, no LLM involved.
    pub async fn scrape(&self, url: &str) -> Result<StructuredContent> {
        Self::validate_url(url)?;
        let html = self.fetcher.fetch(url).await?;
        Ok(ContentExtractor::extract(&html))
    }

    /// Process one URL, recording both turns on the session.
    #[instrument(skip(self, session))]
    pub async fn process_url(&self, url: &str, session: &mut SessionContext) -> ProcessOutcome {
        session.push_user(url);

        let outcome = match self.run(url).await {
            Ok((content, dropped_tokens)) => ProcessOutcome::Structured {
                content,
                dropped_tokens,
            },
            Err(err) => ProcessOutcome::Failed {
                message: err.user_message(),
            },
        };

        session.push_bot(outcome.display_text());
        outcome
    }

    async fn run(&self, url: &str) -> Result<(String, usize)> {
        let document = self.scrape(url).await?;

        match &self.llm {
            Some(client) => {
                let reply = client.structure_text(&document.text).await?;
                Ok((reply.content, reply.dropped_tokens))
            }
            None => Ok((document.text, 0)),
        }
    }

    /// Persist the session transcript, if a store is configured.
    pub async fn persist(&self, session: &SessionContext) -> Result<()> {
        match &self.store {
            Some(store) => {
                store.upsert_session(session).await?;
                Ok(())
            }
            None => {
                debug!("No store configured, skipping persistence");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ERROR_PREFIX;
    use crate::session::Role;
    use std::time::Duration;

    fn bare_pipeline() -> Pipeline {
        let fetcher = PageFetcher::new(Duration::from_millis(200), "pagesift-test/0.1").unwrap();
        Pipeline::new(fetcher, None, None)
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(Pipeline::validate_url("http://example.com").is_ok());
        assert!(Pipeline::validate_url("https://example.com/page?x=1").is_ok());
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        assert!(Pipeline::validate_url("ftp://example.com").is_err());
        assert!(Pipeline::validate_url("file:///etc/hosts").is_err());
    }

    #[test]
    fn test_validate_rejects_scheme_less_input() {
        assert!(Pipeline::validate_url("example.com").is_err());
        assert!(Pipeline::validate_url("").is_err());
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_network_call() {
        let pipeline = bare_pipeline();
        let mut session = SessionContext::new();

        let outcome = pipeline
            .process_url("ftp://example.com", &mut session)
            .await;

        assert!(outcome.is_failure());
        assert_eq!(
            outcome.display_text(),
            "ERROR: Please enter a valid URL starting with http or https."
        );
    }

    #[tokio::test]
    async fn test_both_turns_recorded_on_failure() {
        let pipeline = bare_pipeline();
        let mut session = SessionContext::new();

        let outcome = pipeline
            .process_url("http://192.0.2.1/", &mut session) // unroutable
            .await;

        assert!(outcome.is_failure());
        assert!(outcome.display_text().starts_with(ERROR_PREFIX));

        let turns = session.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "http://192.0.2.1/");
        assert_eq!(turns[1].role, Role::Bot);
        assert_eq!(turns[1].content, outcome.display_text());
    }

    #[tokio::test]
    async fn test_persist_without_store_is_noop() {
        let pipeline = bare_pipeline();
        let session = SessionContext::new();
        assert!(pipeline.persist(&session).await.is_ok());
    }
}
