//! Analysis command handler

use crate::clients::{AnalysisClient, AnalysisTurn, TurnScore};
use crate::config::Config;
use crate::error::Result;
use crate::ledger::SessionLedger;
use colored::Colorize;
use prettytable::{format, Table};
use std::time::Duration;

/// Run semantic analysis over the active session and print the scores
pub async fn run_analyze(config: &Config) -> Result<()> {
    let ledger = SessionLedger::open()?;
    let client = AnalysisClient::new(
        &config.endpoints.analysis_base(),
        Duration::from_secs(config.chat.timeout_seconds),
    )?;

    let batch = AnalysisTurn::from_ledger(ledger.active_turns());
    let scores = client.analyze(&batch).await?;

    if scores.is_empty() {
        println!("{}", "No scores available.".yellow());
        return Ok(());
    }

    print_score_table(&scores);
    Ok(())
}

/// Print per-turn scores as a table
pub fn print_score_table(scores: &[TurnScore]) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "Id".bold(),
        "Speaker".bold(),
        "Coherence".bold(),
        "Drift".bold(),
        "Entropy".bold(),
        "Resonance".bold(),
        "Volatility".bold(),
        "Novelty".bold(),
        "Cluster".bold()
    ]);

    for score in scores {
        table.add_row(prettytable::row![
            score.id,
            score.speaker,
            format!("{:.2}", score.coherence),
            format!("{:.2}", score.drift),
            format!("{:.2}", score.entropy),
            format!("{:.2}", score.resonance),
            format!("{:.2}", score.volatility),
            format!("{:.2}", score.novelty),
            score.cluster
        ]);
    }

    println!("\nSemantic analysis:");
    table.printstd();
    println!();
}
