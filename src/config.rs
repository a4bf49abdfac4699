//! Configuration management for Joojit
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{JoojitError, Result};
use crate::panel::Panel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Joojit
///
/// This structure holds all configuration needed by the client,
/// including endpoint selection, chat behavior, panel timing, and the
/// ledger file location.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote endpoint configuration
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Chat client behavior
    #[serde(default)]
    pub chat: ChatConfig,

    /// Panel transition settings
    #[serde(default)]
    pub panel: PanelConfig,

    /// Session ledger settings
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Remote endpoint configuration
///
/// The chat base URL is resolved in three steps: an explicit `base`
/// override wins, otherwise the local-development base is used when the
/// runtime host indicates local execution, and the deployed base is the
/// fallback. Analysis and export default to the same resolved origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Explicit base URL override; wins over host detection
    #[serde(default)]
    pub base: Option<String>,

    /// Base URL used when running against a local backend
    #[serde(default = "default_local_base")]
    pub local_base: String,

    /// Base URL of the deployed backend
    #[serde(default = "default_deployed_base")]
    pub deployed_base: String,

    /// Origin of the analysis endpoint, when different from the chat base
    #[serde(default)]
    pub analysis_origin: Option<String>,

    /// Base URL of the export endpoint, when different from the chat base
    #[serde(default)]
    pub export_base: Option<String>,
}

fn default_local_base() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_deployed_base() -> String {
    "https://web-production-385b3.up.railway.app".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base: None,
            local_base: default_local_base(),
            deployed_base: default_deployed_base(),
            analysis_origin: None,
            export_base: None,
        }
    }
}

impl EndpointsConfig {
    /// Resolve the base URL for the chat endpoint
    pub fn chat_base(&self) -> String {
        if let Some(base) = &self.base {
            return base.clone();
        }
        if host_indicates_local() {
            self.local_base.clone()
        } else {
            self.deployed_base.clone()
        }
    }

    /// Resolve the origin for the analysis endpoint
    ///
    /// Defaults to the chat base when no dedicated origin is configured.
    pub fn analysis_base(&self) -> String {
        self.analysis_origin
            .clone()
            .unwrap_or_else(|| self.chat_base())
    }

    /// Resolve the base URL for the export endpoint
    ///
    /// Defaults to the chat base when no dedicated base is configured.
    pub fn export_base(&self) -> String {
        self.export_base.clone().unwrap_or_else(|| self.chat_base())
    }
}

/// Check whether the runtime host indicates local execution
///
/// `JOOJIT_LOCAL=1` forces local mode; otherwise the `HOSTNAME`
/// environment variable is inspected for a local marker.
fn host_indicates_local() -> bool {
    if std::env::var("JOOJIT_LOCAL").map(|v| v == "1").unwrap_or(false) {
        return true;
    }
    std::env::var("HOSTNAME")
        .map(|h| {
            let h = h.to_lowercase();
            h.contains("localhost") || h.contains("local")
        })
        .unwrap_or(false)
}

/// Chat client behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model identifier recorded when the endpoint omits one
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_fallback_model() -> String {
    "gpt-4o".to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            fallback_model: default_fallback_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Panel transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Settle duration of a panel transition in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Panel shown at startup (spores, spiral, or throttle)
    #[serde(default = "default_panel")]
    pub default_panel: String,
}

fn default_settle_ms() -> u64 {
    1000
}

fn default_panel() -> String {
    "spiral".to_string()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            default_panel: default_panel(),
        }
    }
}

/// Session ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LedgerConfig {
    /// Override for the ledger file path
    ///
    /// When absent, the ledger lives in the user's data directory
    /// (subject to the `JOOJIT_LEDGER_PATH` environment override).
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file yields the default configuration; a present but
    /// unparsable file is an error.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| JoojitError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Config = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks that every configured base URL parses, the default panel
    /// names a known panel, and the settle duration is non-zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("endpoints.local_base", Some(&self.endpoints.local_base)),
            ("endpoints.deployed_base", Some(&self.endpoints.deployed_base)),
            ("endpoints.base", self.endpoints.base.as_ref()),
            ("endpoints.analysis_origin", self.endpoints.analysis_origin.as_ref()),
            ("endpoints.export_base", self.endpoints.export_base.as_ref()),
        ] {
            if let Some(value) = value {
                url::Url::parse(value).map_err(|e| {
                    JoojitError::Config(format!("Invalid URL for {}: {} ({})", name, value, e))
                })?;
            }
        }

        Panel::parse_str(&self.panel.default_panel).map_err(JoojitError::Config)?;

        if self.panel.settle_ms == 0 {
            return Err(
                JoojitError::Config("panel.settle_ms must be greater than zero".to_string()).into(),
            );
        }

        if self.chat.fallback_model.trim().is_empty() {
            return Err(
                JoojitError::Config("chat.fallback_model must not be empty".to_string()).into(),
            );
        }

        Ok(())
    }
}
