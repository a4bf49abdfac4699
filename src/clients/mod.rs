//! Thin clients for the remote chat, analysis, and export endpoints
//!
//! Each client wraps a `reqwest` client pointed at a resolved base URL.
//! Failures are caught at the call site and converted into displayable
//! outcomes or degraded empty results; none are fatal to the session.

use crate::error::{JoojitError, Result};
use std::time::Duration;

pub mod analysis;
pub mod chat;
pub mod export;

pub use analysis::{AnalysisClient, AnalysisTurn, TurnScore};
pub use chat::{ChatClient, SendOutcome};
pub use export::{ExportArtifact, ExportClient};

/// Build the HTTP client shared by the endpoint wrappers
pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent("joojit/0.1.0")
        .build()
        .map_err(|e| JoojitError::Chat(format!("Failed to create HTTP client: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client_succeeds() {
        assert!(build_http_client(Duration::from_secs(5)).is_ok());
    }
}
