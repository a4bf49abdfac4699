//! Session listing and clearing
//!
//! Non-interactive counterparts of the chat loop's session commands.

use crate::error::Result;
use crate::ledger::SessionLedger;
use colored::Colorize;
use prettytable::{format, Table};
use std::io::{BufRead, Write};

/// List all stored sessions as a table
pub fn list_sessions() -> Result<()> {
    let ledger = SessionLedger::open()?;
    let summaries = ledger.session_summaries();

    if summaries.is_empty() {
        println!("{}", "No sessions found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "Session".bold(),
        "Turns".bold(),
        "First turn".bold(),
        "Last turn".bold(),
        "Active".bold()
    ]);

    for summary in summaries {
        table.add_row(prettytable::row![
            summary.id.cyan(),
            summary.turn_count,
            summary.first_turn.unwrap_or_else(|| "-".to_string()),
            summary.last_turn.unwrap_or_else(|| "-".to_string()),
            if summary.active { "*" } else { "" }
        ]);
    }

    println!("\nStored sessions:");
    table.printstd();
    println!();
    Ok(())
}

/// Erase every stored session and start over with one empty session
///
/// Destructive: prompts for confirmation unless `yes` is set.
pub fn clear_sessions(yes: bool) -> Result<()> {
    if !yes && !confirm_on_stdin()? {
        println!("Aborted.");
        return Ok(());
    }

    let mut ledger = SessionLedger::open()?;
    let id = ledger.clear_all()?;
    println!("{}", "All sessions cleared.".green());
    println!("{}", format!("Session initialized: {}", id).green());
    Ok(())
}

/// Read a y/N confirmation from stdin
fn confirm_on_stdin() -> Result<bool> {
    print!("This will erase all saved chats. Are you sure? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
