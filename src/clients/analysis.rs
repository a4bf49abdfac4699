//! Analysis endpoint client
//!
//! Sends a batch of conversation turns to the remote semantic-analysis
//! endpoint and receives per-turn scores. Failures degrade to an empty
//! result: callers treat "no scores" as the absence of data, not as a
//! distinct error signal.

use crate::error::{JoojitError, Result};
use crate::ledger::Turn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One turn in the analysis request batch
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisTurn {
    /// Sequential identifier within the batch
    pub id: u64,
    /// Who produced the text (`user` or `assistant`)
    pub speaker: String,
    /// The text to analyze
    pub text: String,
}

impl AnalysisTurn {
    /// Expand ledger turns into the per-utterance batch
    ///
    /// Each stored turn contributes its prompt as a `user` entry and its
    /// reply as an `assistant` entry, ids assigned in conversation order
    /// starting at 1.
    pub fn from_ledger(turns: &[Turn]) -> Vec<AnalysisTurn> {
        let mut batch = Vec::with_capacity(turns.len() * 2);
        for turn in turns {
            batch.push(AnalysisTurn {
                id: batch.len() as u64 + 1,
                speaker: "user".to_string(),
                text: turn.prompt.clone(),
            });
            batch.push(AnalysisTurn {
                id: batch.len() as u64 + 1,
                speaker: "assistant".to_string(),
                text: turn.reply.clone(),
            });
        }
        batch
    }
}

/// Per-turn semantic scores returned by the analysis endpoint
///
/// Metric ranges are not validated locally; the server is the source of
/// truth for metric semantics.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TurnScore {
    /// Identifier matching the request batch
    pub id: u64,
    /// Speaker of the scored turn
    pub speaker: String,
    /// Self-similarity of the turn's embedding
    pub coherence: f64,
    /// Embedding distance from the previous turn
    pub drift: f64,
    /// Dispersion of the turn against the whole conversation
    pub entropy: f64,
    /// Alignment with the conversation's dominant themes
    pub resonance: f64,
    /// Local variation of the metric trajectory
    pub volatility: f64,
    /// Distance from everything said before
    pub novelty: f64,
    /// Cluster assignment
    pub cluster: i64,
}

/// Request payload for `POST {origin}/analyze`
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    turns: &'a [AnalysisTurn],
}

/// Response payload from the analysis endpoint
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    analysis: Vec<TurnScore>,
}

/// Client for the remote analysis endpoint
pub struct AnalysisClient {
    client: reqwest::Client,
    base: String,
}

impl AnalysisClient {
    /// Create an analysis client for the given origin
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = super::build_http_client(timeout)?;
        tracing::info!("Initialized analysis client: base={}", base);
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Analyze a batch of turns
    ///
    /// Empty input short-circuits to an empty result without a request.
    /// Transport failures and non-2xx responses are logged and degrade
    /// to an empty result. A missing or empty `analysis` field is an
    /// empty result.
    ///
    /// # Errors
    ///
    /// Returns an error only when the response body does not match the
    /// endpoint schema.
    pub async fn analyze(&self, turns: &[AnalysisTurn]) -> Result<Vec<TurnScore>> {
        if turns.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/analyze", self.base);
        tracing::debug!("Analyzing {} turns via {}", turns.len(), url);

        let response = match self
            .client
            .post(&url)
            .json(&AnalyzeRequest { turns })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Analysis request failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Analysis endpoint returned {}", status);
            return Ok(Vec::new());
        }

        let parsed: AnalyzeResponse = response.json().await.map_err(|e| JoojitError::Decode {
            endpoint: "/analyze".to_string(),
            message: e.to_string(),
        })?;

        if parsed.analysis.is_empty() {
            tracing::warn!("No analysis data returned from server");
        }

        Ok(parsed.analysis)
    }
}
