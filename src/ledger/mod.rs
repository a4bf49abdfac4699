//! Session ledger: local conversation persistence
//!
//! The ledger owns the persisted mapping from session identifiers to
//! ordered turn lists. Every mutating operation writes the full store to
//! the ledger file before returning, and rehydration tolerates a missing
//! or malformed file by starting from an empty store.

use crate::error::{JoojitError, Result};
use anyhow::Context;
use chrono::Utc;
use directories::ProjectDirs;
use std::path::PathBuf;

pub mod types;
pub use types::{LedgerStore, SessionSummary, Turn};

/// Session ledger with an explicit load/save lifecycle
///
/// Wraps the in-memory [`LedgerStore`] together with the file it is
/// persisted to. Exactly one session is active at a time once
/// [`SessionLedger::ensure_session`] has run.
pub struct SessionLedger {
    path: PathBuf,
    store: LedgerStore,
}

impl SessionLedger {
    /// Open the ledger at its default location
    ///
    /// The ledger file lives in the user's data directory. The
    /// `JOOJIT_LEDGER_PATH` environment variable overrides the location,
    /// which makes it easy to point the binary at a test ledger without
    /// touching the user's data.
    pub fn open() -> Result<Self> {
        if let Ok(override_path) = std::env::var("JOOJIT_LEDGER_PATH") {
            return Self::open_at(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "joojit", "joojit")
            .ok_or_else(|| JoojitError::Ledger("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| JoojitError::Ledger(e.to_string()))?;

        Self::open_at(data_dir.join("ledger.json"))
    }

    /// Open the ledger at the specified path
    ///
    /// Primarily useful for tests where the default application data
    /// directory is not desirable (for example, a temporary directory).
    ///
    /// # Examples
    ///
    /// ```
    /// use joojit::ledger::SessionLedger;
    ///
    /// let mut ledger = SessionLedger::open_at("/tmp/test_ledger.json").unwrap();
    /// ledger.ensure_session().unwrap();
    /// ```
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for ledger")
                .map_err(|e| JoojitError::Ledger(e.to_string()))?;
        }

        let store = Self::load(&path);
        Ok(Self { path, store })
    }

    /// Path of the ledger file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Rehydrate the store from disk
    ///
    /// A missing or malformed file yields an empty store; rehydration
    /// never fails. The active-session invariant is repaired when the
    /// pointer does not key an existing session.
    fn load(path: &PathBuf) -> LedgerStore {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                tracing::debug!("No ledger file at {}, starting empty", path.display());
                return LedgerStore::default();
            }
        };

        let mut store: LedgerStore = match serde_json::from_str(&contents) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Malformed ledger file {}: {}; starting empty", path.display(), e);
                return LedgerStore::default();
            }
        };

        if let Some(active) = &store.active_session {
            if !store.sessions.contains_key(active) {
                tracing::warn!("Active session {} missing from store, clearing pointer", active);
                store.active_session = None;
            }
        }

        store
    }

    /// Persist the full store to the ledger file
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.store)?;
        std::fs::write(&self.path, json)
            .context("Failed to write ledger file")
            .map_err(|e| JoojitError::Ledger(e.to_string()))?;
        Ok(())
    }

    /// Create a fresh session and make it active
    ///
    /// The session id is derived from the creation time. Returns the new
    /// session id.
    pub fn create_session(&mut self) -> Result<String> {
        let id = format!("session_{}", Utc::now().to_rfc3339());
        self.store.sessions.insert(id.clone(), Vec::new());
        self.store.active_session = Some(id.clone());
        self.save()?;
        tracing::info!("Session initialized: {}", id);
        Ok(id)
    }

    /// Create a session only when none is active
    ///
    /// Covers the implicit first-load case. Returns the active session id.
    pub fn ensure_session(&mut self) -> Result<String> {
        match self.store.active_session.clone() {
            Some(id) => Ok(id),
            None => self.create_session(),
        }
    }

    /// Id of the active session, when one exists
    pub fn active_session_id(&self) -> Option<&str> {
        self.store.active_session.as_deref()
    }

    /// Turns of the active session, in conversation order
    ///
    /// Returns an empty slice when no active session exists; never fails.
    pub fn active_turns(&self) -> &[Turn] {
        self.store
            .active_session
            .as_ref()
            .and_then(|id| self.store.sessions.get(id))
            .map(|turns| turns.as_slice())
            .unwrap_or(&[])
    }

    /// Append a turn to the active session and persist the store
    ///
    /// # Errors
    ///
    /// Returns an error when no active session exists. Callers must
    /// guarantee a session exists before any chat interaction.
    pub fn append_turn(
        &mut self,
        prompt: &str,
        reply: &str,
        model: &str,
        latency_ms: u64,
    ) -> Result<Turn> {
        let active = self
            .store
            .active_session
            .clone()
            .ok_or_else(|| JoojitError::Ledger("no active session".to_string()))?;

        let turn = Turn::new(prompt, reply, model, latency_ms);
        self.store
            .sessions
            .get_mut(&active)
            .ok_or_else(|| JoojitError::Ledger(format!("active session {} missing", active)))?
            .push(turn.clone());

        self.save()?;
        Ok(turn)
    }

    /// Discard every session and start over with one empty session
    ///
    /// Irreversible. Callers must confirm intent before invoking.
    /// Returns the id of the freshly created session.
    pub fn clear_all(&mut self) -> Result<String> {
        self.store = LedgerStore::default();
        let id = self.create_session()?;
        tracing::info!("All sessions cleared");
        Ok(id)
    }

    /// Summaries of every stored session, active session first
    pub fn session_summaries(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> = self
            .store
            .sessions
            .iter()
            .map(|(id, turns)| SessionSummary {
                id: id.clone(),
                turn_count: turns.len(),
                first_turn: turns.first().map(|t| t.timestamp.clone()),
                last_turn: turns.last().map(|t| t.timestamp.clone()),
                active: self.store.active_session.as_deref() == Some(id),
            })
            .collect();
        summaries.sort_by_key(|s| !s.active);
        summaries
    }
}
