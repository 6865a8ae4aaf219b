//! Per-session conversation context
//!
//! Each extraction session owns its identifier and turn history. The caller
//! creates the context at session start, passes it to every operation that
//! records a turn, and tears it down (after persisting) at session end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person driving the session
    User,
    /// The application's reply (structured content or an error message)
    Bot,
}

/// One role-tagged conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who authored the turn
    pub role: Role,
    /// Turn content: a URL, structured text, or an error message
    pub content: String,
}

/// Caller-owned conversation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Session identifier, fresh per session
    pub session_id: Uuid,
    /// When the session was created
    pub started_at: DateTime<Utc>,
    turns: Vec<ChatTurn>,
}

impl SessionContext {
    /// Start a new session with a fresh identifier.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    /// Record a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: Role::User,
            content: content.into(),
        });
    }

    /// Record a bot turn.
    pub fn push_bot(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: Role::Bot,
            content: content.into(),
        });
    }

    /// The turns recorded so far, in insertion order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(SessionContext::new().session_id, SessionContext::new().session_id);
    }

    #[test]
    fn test_turns_preserve_order_and_roles() {
        let mut session = SessionContext::new();
        session.push_user("https://example.com");
        session.push_bot("=== OVERVIEW ===\ncontent");
        session.push_user("https://example.org");
        session.push_bot("ERROR: Failed to scrape the page: HTTP status 404");

        let turns = session.turns();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Bot);
        assert!(turns[3].content.starts_with("ERROR:"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let turn = ChatTurn {
            role: Role::Bot,
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"role\":\"bot\""));

        let back: ChatTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, Role::Bot);
    }
}
