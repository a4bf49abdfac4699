//! Joojit - Terminal chat client library
//!
//! This library provides the core functionality for the Joojit chat
//! client: local session persistence, panel transition control, and thin
//! clients for the remote chat, analysis, and export endpoints.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `ledger`: Session ledger with an explicit load/save lifecycle
//! - `panel`: Panel enumeration and the transition state machine
//! - `clients`: Chat, analysis, and export endpoint clients
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//! - `commands`: Handlers invoked by the CLI entrypoint
//!
//! # Example
//!
//! ```no_run
//! use joojit::ledger::SessionLedger;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut ledger = SessionLedger::open()?;
//!     ledger.ensure_session()?;
//!     ledger.append_turn("hi", "hello!", "gpt-4o", 120)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger;
pub mod panel;

// Re-export commonly used types
pub use clients::{AnalysisClient, ChatClient, ExportClient, SendOutcome};
pub use config::Config;
pub use error::{JoojitError, Result};
pub use ledger::{SessionLedger, Turn};
pub use panel::{Panel, PanelController};
