//! Session persistence
//!
//! Upserts the session transcript to a REST document store. The record
//! carries a fresh document id, the session id, and the full role-tagged
//! exchange, plus the partition key field the store is configured to shard
//! on. Persistence is best-effort: callers log failures and move on.

use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::session::SessionContext;

/// REST document-store client
#[derive(Clone)]
pub struct SessionStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    container: String,
    partition_key: String,
}

impl SessionStore {
    /// Create a store client.
    ///
    /// `partition_key` names the record field the store partitions on; the
    /// session id is written there so one session's documents land together.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        container: impl Into<String>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            container: container.into(),
            partition_key: partition_key.into(),
        }
    }

    /// Upsert the session transcript as one document.
    pub async fn upsert_session(&self, session: &SessionContext) -> Result<(), StoreError> {
        let record = self.session_record(session)?;
        let url = format!("{}/containers/{}/docs", self.base_url, self.container);

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .header("x-upsert", "true")
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(session_id = %session.session_id, "Session persisted");
        Ok(())
    }

    fn session_record(&self, session: &SessionContext) -> Result<serde_json::Value, StoreError> {
        let chat = serde_json::to_value(session.turns())
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let mut record = json!({
            "id": Uuid::new_v4().to_string(),
            "session_id": session.session_id.to_string(),
            "started_at": session.started_at.to_rfc3339(),
            "chat": chat,
        });

        // Shard field named by configuration, same value as session_id.
        record[self.partition_key.as_str()] = json!(session.session_id.to_string());

        debug!(
            turns = session.turns().len(),
            partition_key = %self.partition_key,
            "Built session record"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new("https://store.example.com/", "key", "chats", "partition_id")
    }

    #[test]
    fn test_record_carries_ids_and_chat() {
        let mut session = SessionContext::new();
        session.push_user("https://example.com");
        session.push_bot("=== OVERVIEW ===\ncontent");

        let record = store().session_record(&session).unwrap();
        assert_eq!(record["session_id"], session.session_id.to_string());
        assert_ne!(record["id"], record["session_id"]);
        assert_eq!(record["chat"].as_array().unwrap().len(), 2);
        assert_eq!(record["chat"][0]["role"], "user");
        assert_eq!(record["chat"][1]["role"], "bot");
    }

    #[test]
    fn test_record_embeds_partition_key_field() {
        let session = SessionContext::new();
        let record = store().session_record(&session).unwrap();
        assert_eq!(record["partition_id"], session.session_id.to_string());
    }

    #[test]
    fn test_each_upsert_gets_fresh_document_id() {
        let session = SessionContext::new();
        let s = store();
        let first = s.session_record(&session).unwrap();
        let second = s.session_record(&session).unwrap();
        assert_ne!(first["id"], second["id"]);
    }
}
