//! Interactive chat loop
//!
//! Runs a readline-based loop that submits user input to the chat
//! endpoint, persists completed turns, and handles the panel-switching
//! and session-management slash commands.

use crate::clients::{AnalysisClient, AnalysisTurn, ChatClient, ExportClient, SendOutcome};
use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
use crate::config::Config;
use crate::error::Result;
use crate::ledger::{SessionLedger, Turn};
use crate::panel::{Panel, PanelController};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;
use std::time::Duration;

/// Start the interactive chat loop
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `panel` - Optional override for the initial panel
pub async fn run_chat(config: Config, panel: Option<String>) -> Result<()> {
    let initial = match panel.as_deref() {
        Some(name) => Panel::parse_str(name).map_err(crate::error::JoojitError::Config)?,
        None => Panel::parse_str(&config.panel.default_panel)
            .map_err(crate::error::JoojitError::Config)?,
    };

    let mut ledger = SessionLedger::open()?;
    ledger.ensure_session()?;

    let timeout = Duration::from_secs(config.chat.timeout_seconds);
    let chat = ChatClient::new(
        &config.endpoints.chat_base(),
        &config.chat.fallback_model,
        timeout,
    )?;
    let analysis = AnalysisClient::new(&config.endpoints.analysis_base(), timeout)?;
    let export = ExportClient::new(&config.endpoints.export_base(), timeout)?;

    let mut panels = PanelController::new(initial, Duration::from_millis(config.panel.settle_ms));

    let mut rl = DefaultEditor::new()?;

    print_welcome_banner(initial, &ledger);
    replay_history(panels.current(), ledger.active_turns());

    loop {
        let prompt = format!(
            "[{}] {} >> ",
            panels.current().to_string().cyan(),
            panels.current().placeholder().dimmed()
        );
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                match parse_special_command(trimmed) {
                    Ok(SpecialCommand::SwitchPanel(target)) => {
                        if panels.activate(target).is_some() {
                            replay_history(panels.current(), ledger.active_turns());
                        }
                    }
                    Ok(SpecialCommand::NewSession) => {
                        let id = ledger.create_session()?;
                        println!("{}", format!("Session initialized: {}", id).green());
                    }
                    Ok(SpecialCommand::ClearAll) => {
                        if confirm_clear(&mut rl)? {
                            let id = ledger.clear_all()?;
                            println!("{}", "All sessions cleared.".green());
                            println!("{}", format!("Session initialized: {}", id).green());
                        }
                    }
                    Ok(SpecialCommand::Export) => {
                        run_export(&export, &ledger).await;
                    }
                    Ok(SpecialCommand::Analyze) => {
                        run_analysis(&analysis, ledger.active_turns()).await;
                    }
                    Ok(SpecialCommand::History) => {
                        replay_history(panels.current(), ledger.active_turns());
                    }
                    Ok(SpecialCommand::ShowStatus) => {
                        print_status(&panels, &ledger);
                    }
                    Ok(SpecialCommand::Help) => {
                        print_help();
                    }
                    Ok(SpecialCommand::Exit) => break,
                    Ok(SpecialCommand::None) => {
                        submit_prompt(&chat, &mut ledger, trimmed).await;
                    }
                    Err(e) => {
                        eprintln!("{}", e.to_string().yellow());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("{}", "Goodbye.".dimmed());
    Ok(())
}

/// Submit a prompt to the chat endpoint and display the outcome inline
async fn submit_prompt(chat: &ChatClient, ledger: &mut SessionLedger, prompt: &str) {
    // Provisional pending indicator, replaced once the reply arrives.
    print!("{}", "...".dimmed());
    let _ = std::io::stdout().flush();

    match chat.send(prompt, ledger).await {
        Ok(SendOutcome::Completed(turn)) => {
            print!("\r\x1b[2K");
            println!("{}", turn.reply);
            println!(
                "{}",
                format!("({}, {} ms)", turn.model, turn.latency_ms).dimmed()
            );
        }
        Ok(SendOutcome::Failed(message)) => {
            print!("\r\x1b[2K");
            eprintln!("{}", message.red());
        }
        Ok(SendOutcome::Busy) => {
            print!("\r\x1b[2K");
            eprintln!("{}", "A request is already in flight.".yellow());
        }
        Ok(SendOutcome::EmptyPrompt) => {
            print!("\r\x1b[2K");
        }
        Err(e) => {
            // Decode or persistence failures are local to this prompt.
            print!("\r\x1b[2K");
            eprintln!("{}", format!("Error: {}", e).red());
        }
    }
}

/// Export the active session and write the artifact to the current directory
async fn run_export(export: &ExportClient, ledger: &SessionLedger) {
    match export.export(ledger.active_turns()).await {
        Ok(artifact) => match std::fs::write(&artifact.filename, &artifact.bytes) {
            Ok(()) => println!(
                "{}",
                format!("Exported {} turns to {}", ledger.active_turns().len(), artifact.filename)
                    .green()
            ),
            Err(e) => eprintln!("{}", format!("Failed to save export: {}", e).red()),
        },
        Err(e) => {
            tracing::warn!("Export failed: {}", e);
            eprintln!("{}", "There was an issue exporting the conversation.".red());
            eprintln!("{}", e.to_string().dimmed());
        }
    }
}

/// Analyze the active session and print the score table
async fn run_analysis(analysis: &AnalysisClient, turns: &[Turn]) {
    let batch = AnalysisTurn::from_ledger(turns);
    match analysis.analyze(&batch).await {
        Ok(scores) if scores.is_empty() => {
            println!("{}", "No scores available.".yellow());
        }
        Ok(scores) => {
            crate::commands::analyze::print_score_table(&scores);
        }
        Err(e) => {
            eprintln!("{}", format!("Analysis failed: {}", e).red());
        }
    }
}

/// Ask for confirmation before erasing all sessions
fn confirm_clear(rl: &mut DefaultEditor) -> Result<bool> {
    match rl.readline("This will erase all saved chats. Are you sure? [y/N] ") {
        Ok(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Print the welcome banner
fn print_welcome_banner(panel: Panel, ledger: &SessionLedger) {
    println!("{}", "Joojit".bold());
    if let Some(id) = ledger.active_session_id() {
        println!("{}", format!("Active session: {}", id).dimmed());
    }
    println!(
        "{}",
        format!("Current panel: {} ({})", panel, panel.placeholder()).dimmed()
    );
    println!("{}", "Type /help for commands.".dimmed());
    println!();
}

/// Re-render the stored turns for the given panel
fn replay_history(panel: Panel, turns: &[Turn]) {
    println!(
        "{}",
        format!("--- {} ({} turns) ---", panel, turns.len()).dimmed()
    );
    for turn in turns {
        println!("{} {}", ">".cyan(), turn.prompt);
        println!("{}", turn.reply);
    }
}

/// Print the current panel and session status
fn print_status(panels: &PanelController, ledger: &SessionLedger) {
    println!("Panel: {} ({})", panels.current(), panels.current().placeholder());
    println!(
        "Transitioning: {}",
        if panels.is_transitioning() { "yes" } else { "no" }
    );
    match ledger.active_session_id() {
        Some(id) => println!("Session: {} ({} turns)", id, ledger.active_turns().len()),
        None => println!("Session: none"),
    }
    println!("Ledger: {}", ledger.path().display());
}
