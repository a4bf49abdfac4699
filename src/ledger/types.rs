use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One prompt/reply exchange with metadata
///
/// Created by the chat client on a successful response and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique identifier for the turn
    pub id: String,
    /// RFC 3339 timestamp of when the turn was recorded
    pub timestamp: String,
    /// The user prompt
    pub prompt: String,
    /// The endpoint's reply
    pub reply: String,
    /// Model identifier reported by the endpoint (or the fallback)
    pub model: String,
    /// Wall-clock latency of the exchange, in milliseconds
    pub latency_ms: u64,
}

impl Turn {
    /// Construct a turn with a fresh id and the current timestamp
    pub fn new(prompt: &str, reply: &str, model: &str, latency_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            prompt: prompt.to_string(),
            reply: reply.to_string(),
            model: model.to_string(),
            latency_ms,
        }
    }
}

/// The full persisted collection of sessions plus the active pointer
///
/// Serialized as a single JSON document. Field names match the durable
/// storage record: `{"sessions": {...}, "activeSession": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerStore {
    /// Mapping from session id to its ordered turn list
    #[serde(default)]
    pub sessions: BTreeMap<String, Vec<Turn>>,

    /// Id of the current session, when one exists
    #[serde(rename = "activeSession", default)]
    pub active_session: Option<String>,
}

/// Summary of a stored session, for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier
    pub id: String,
    /// Number of turns in the session
    pub turn_count: usize,
    /// Timestamp of the first turn, when any
    pub first_turn: Option<String>,
    /// Timestamp of the last turn, when any
    pub last_turn: Option<String>,
    /// Whether this is the active session
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_new_populates_metadata() {
        let turn = Turn::new("hi", "hello!", "gpt-4o", 120);
        assert_eq!(turn.prompt, "hi");
        assert_eq!(turn.reply, "hello!");
        assert_eq!(turn.model, "gpt-4o");
        assert_eq!(turn.latency_ms, 120);
        assert!(!turn.id.is_empty());
        assert!(!turn.timestamp.is_empty());
    }

    #[test]
    fn test_turn_ids_are_unique() {
        let a = Turn::new("a", "b", "m", 1);
        let b = Turn::new("a", "b", "m", 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_store_serializes_with_wire_field_names() {
        let mut store = LedgerStore::default();
        store.active_session = Some("session_x".to_string());
        store.sessions.insert("session_x".to_string(), vec![]);

        let json = serde_json::to_string(&store).expect("serialize failed");
        assert!(json.contains("\"activeSession\""));
        assert!(json.contains("\"sessions\""));
    }

    #[test]
    fn test_store_deserializes_missing_fields_to_empty() {
        let store: LedgerStore = serde_json::from_str("{}").expect("deserialize failed");
        assert!(store.sessions.is_empty());
        assert!(store.active_session.is_none());
    }

    #[test]
    fn test_turn_roundtrip_preserves_fields() {
        let turn = Turn::new("hi", "hello!", "gpt-4o", 120);
        let json = serde_json::to_string(&turn).expect("serialize failed");
        let back: Turn = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(back, turn);
    }
}
