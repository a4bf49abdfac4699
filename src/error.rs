//! Error types for Joojit
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Joojit operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, ledger persistence, and calls to the remote
/// chat, analysis, and export endpoints.
#[derive(Error, Debug)]
pub enum JoojitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ledger persistence errors (reading or writing the ledger file)
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Chat endpoint errors
    #[error("Chat endpoint error: {0}")]
    Chat(String),

    /// Analysis endpoint errors
    #[error("Analysis endpoint error: {0}")]
    Analysis(String),

    /// Export errors (empty session or failed export round-trip)
    #[error("Export error: {0}")]
    Export(String),

    /// A remote endpoint returned a payload that does not match its schema
    #[error("Malformed response from {endpoint}: {message}")]
    Decode {
        /// The endpoint that produced the payload
        endpoint: String,
        /// What failed to decode
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Joojit operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
