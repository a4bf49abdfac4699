//! Export command handler

use crate::clients::ExportClient;
use crate::config::Config;
use crate::error::Result;
use crate::ledger::SessionLedger;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// Export the active session to a `.jsonl` file
///
/// # Arguments
///
/// * `config` - Global configuration
/// * `output` - Directory to write the artifact to (defaults to the
///   current directory)
pub async fn run_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let ledger = SessionLedger::open()?;
    let client = ExportClient::new(
        &config.endpoints.export_base(),
        Duration::from_secs(config.chat.timeout_seconds),
    )?;

    let artifact = client.export(ledger.active_turns()).await?;

    let dir = match output {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes)?;

    println!(
        "{}",
        format!(
            "Exported {} turns to {}",
            ledger.active_turns().len(),
            path.display()
        )
        .green()
    );
    Ok(())
}
