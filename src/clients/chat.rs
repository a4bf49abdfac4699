//! Chat endpoint client
//!
//! Sends a user prompt to the remote chat endpoint, measures wall-clock
//! latency, and hands the resulting turn to the session ledger. One
//! request per invocation, no retries, no cancellation. An explicit
//! in-flight flag rejects overlapping sends instead of racing them.

use crate::error::{JoojitError, Result};
use crate::ledger::{SessionLedger, Turn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Request payload for `POST {base}/ask`
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    prompt: &'a str,
}

/// Response payload from the chat endpoint
#[derive(Debug, Deserialize)]
struct AskResponse {
    reply: String,
    #[serde(default)]
    model: Option<String>,
}

/// Outcome of a single send
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// The prompt was empty after trimming; no request was made
    EmptyPrompt,
    /// A request is already in flight; this send was rejected
    Busy,
    /// The endpoint replied and the turn was appended to the ledger
    Completed(Turn),
    /// The request failed; nothing was persisted. Carries the
    /// user-visible message to display in place of the reply.
    Failed(String),
}

/// Error text displayed in place of the reply when a send fails
pub const SEND_ERROR_TEXT: &str = "Error: Could not connect to the agent.";

/// Client for the remote chat endpoint
pub struct ChatClient {
    client: reqwest::Client,
    base: String,
    fallback_model: String,
    in_flight: AtomicBool,
}

impl ChatClient {
    /// Create a chat client for the given base URL
    ///
    /// # Arguments
    ///
    /// * `base` - Resolved base URL of the chat endpoint
    /// * `fallback_model` - Model identifier recorded when the response omits one
    /// * `timeout` - HTTP client timeout
    pub fn new(base: &str, fallback_model: &str, timeout: Duration) -> Result<Self> {
        let client = super::build_http_client(timeout)?;
        tracing::info!("Initialized chat client: base={}", base);
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
            fallback_model: fallback_model.to_string(),
            in_flight: AtomicBool::new(false),
        })
    }

    /// Whether a send is currently in flight
    pub fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Send a prompt to the chat endpoint
    ///
    /// Empty prompts are rejected without a request. On a 2xx response
    /// the turn is appended to the ledger with the measured latency and
    /// the reported (or fallback) model. On transport or status failure
    /// the outcome carries a displayable error and nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error when the response body does not match the
    /// endpoint schema, or when ledger persistence fails.
    pub async fn send(&self, prompt: &str, ledger: &mut SessionLedger) -> Result<SendOutcome> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Ok(SendOutcome::EmptyPrompt);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Rejecting overlapping send");
            return Ok(SendOutcome::Busy);
        }
        let _guard = FlightGuard(&self.in_flight);

        let url = format!("{}/ask", self.base);
        let start = Instant::now();

        let response = match self
            .client
            .post(&url)
            .json(&AskRequest { prompt: trimmed })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                return Ok(SendOutcome::Failed(SEND_ERROR_TEXT.to_string()));
            }
        };

        let latency_ms = (start.elapsed().as_secs_f64() * 1000.0).round() as u64;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Chat endpoint returned {}", status);
            return Ok(SendOutcome::Failed(SEND_ERROR_TEXT.to_string()));
        }

        let ask: AskResponse = response.json().await.map_err(|e| JoojitError::Decode {
            endpoint: "/ask".to_string(),
            message: e.to_string(),
        })?;

        let model = ask.model.unwrap_or_else(|| self.fallback_model.clone());
        let turn = ledger.append_turn(trimmed, &ask.reply, &model, latency_ms)?;
        tracing::debug!("Turn persisted: model={}, latency_ms={}", model, latency_ms);

        Ok(SendOutcome::Completed(turn))
    }
}

/// Clears the in-flight flag when a send returns by any path
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
