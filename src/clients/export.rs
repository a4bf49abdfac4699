//! Export endpoint client
//!
//! Posts the active session's turns to the remote export endpoint and
//! returns the downloadable byte stream together with the client-side
//! filename.

use crate::error::{JoojitError, Result};
use crate::ledger::Turn;
use chrono::Utc;
use std::time::Duration;

/// A completed export: the bytes to save and the filename to save under
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Client-side filename, `session_<date>.jsonl`
    pub filename: String,
    /// Newline-delimited JSON records returned by the endpoint
    pub bytes: Vec<u8>,
}

/// Client for the remote export endpoint
pub struct ExportClient {
    client: reqwest::Client,
    base: String,
}

impl ExportClient {
    /// Create an export client for the given base URL
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = super::build_http_client(timeout)?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Export a session's turns
    ///
    /// # Errors
    ///
    /// Fails when the turn list is empty, or when the export round-trip
    /// to the endpoint fails. Both are reported to the caller, neither
    /// is fatal to the session.
    pub async fn export(&self, turns: &[Turn]) -> Result<ExportArtifact> {
        if turns.is_empty() {
            return Err(JoojitError::Export("nothing to export".to_string()).into());
        }

        let url = format!("{}/export", self.base);
        tracing::debug!("Exporting {} turns via {}", turns.len(), url);

        let response = self
            .client
            .post(&url)
            .json(turns)
            .send()
            .await
            .map_err(|e| JoojitError::Export(format!("export request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                JoojitError::Export(format!("export endpoint returned {}", status)).into(),
            );
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| JoojitError::Export(format!("failed to read export body: {}", e)))?
            .to_vec();

        Ok(ExportArtifact {
            filename: export_filename(),
            bytes,
        })
    }
}

/// Client-side filename for today's export
fn export_filename() -> String {
    format!("session_{}.jsonl", Utc::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_empty_turns_is_an_error() {
        let client =
            ExportClient::new("http://127.0.0.1:9", Duration::from_millis(100)).expect("client");
        let result = client.export(&[]).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nothing to export"));
    }

    #[tokio::test]
    async fn test_export_transport_failure_is_reported() {
        let client =
            ExportClient::new("http://127.0.0.1:9", Duration::from_millis(100)).expect("client");
        let turns = vec![Turn::new("hi", "hello!", "gpt-4o", 120)];
        assert!(client.export(&turns).await.is_err());
    }

    #[test]
    fn test_export_filename_pattern() {
        let name = export_filename();
        assert!(name.starts_with("session_"));
        assert!(name.ends_with(".jsonl"));
        // session_YYYY-MM-DD.jsonl
        assert_eq!(name.len(), "session_0000-00-00.jsonl".len());
    }
}
