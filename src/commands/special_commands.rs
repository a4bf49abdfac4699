//! Special commands parser for the interactive chat loop
//!
//! This module parses the slash commands available during a chat
//! session. Special commands allow users to:
//! - Switch between the three panels
//! - Start a new session or clear all sessions
//! - Export the active session or run semantic analysis on it
//! - Replay the stored history, view status, and exit
//!
//! Commands are prefixed with `/` and are case-insensitive.

use crate::panel::Panel;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Special commands that can be executed during interactive chat
///
/// These commands modify the session state or provide information,
/// rather than being sent to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Switch to a different panel
    ///
    /// Requests a transition; requests arriving mid-transition are dropped.
    SwitchPanel(Panel),

    /// Start a fresh session and clear the displayed history
    NewSession,

    /// Erase every stored session after confirmation
    ClearAll,

    /// Export the active session to a `.jsonl` file
    Export,

    /// Run semantic analysis over the active session
    Analyze,

    /// Replay the active session's stored turns
    History,

    /// Display the current panel and session status
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be sent to the chat endpoint as a prompt.
    None,
}

/// Parse input from the chat loop into a special command
///
/// Input that does not start with `/` is not a command (except the bare
/// `exit`/`quit` shorthands) and is returned as [`SpecialCommand::None`].
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        // Panel switching
        "/panel" => Err(CommandError::MissingArgument {
            command: "/panel".to_string(),
            usage: "/panel <spores|spiral|throttle>".to_string(),
        }),
        input if input.starts_with("/panel ") => {
            let arg = input[7..].trim();
            match Panel::parse_str(arg) {
                Ok(panel) => Ok(SpecialCommand::SwitchPanel(panel)),
                Err(_) => Err(CommandError::UnsupportedArgument {
                    command: "/panel".to_string(),
                    arg: arg.to_string(),
                }),
            }
        }
        // Panel shorthands
        "/spores" => Ok(SpecialCommand::SwitchPanel(Panel::Spores)),
        "/spiral" => Ok(SpecialCommand::SwitchPanel(Panel::Spiral)),
        "/throttle" => Ok(SpecialCommand::SwitchPanel(Panel::Throttle)),

        // Session management
        "/new" => Ok(SpecialCommand::NewSession),
        "/clear" => Ok(SpecialCommand::ClearAll),
        "/export" => Ok(SpecialCommand::Export),
        "/analyze" => Ok(SpecialCommand::Analyze),
        "/history" => Ok(SpecialCommand::History),

        // Status and help
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/help" | "/?" => Ok(SpecialCommand::Help),

        // Exit
        "/quit" | "/exit" | "exit" | "quit" => Ok(SpecialCommand::Exit),

        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Print help for the special commands
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Chat
=====================================

PANEL SWITCHING:
  /panel spores    - Switch to the spores panel (reflect...)
  /panel spiral    - Switch to the spiral panel (compose...)
  /panel throttle  - Switch to the throttle panel (ignite...)
  /spores /spiral /throttle - Shorthands for the above

SESSION MANAGEMENT:
  /new             - Start a fresh session
  /clear           - Erase ALL saved sessions (asks for confirmation)
  /history         - Replay the active session's stored turns
  /export          - Export the active session as a .jsonl file
  /analyze         - Run semantic analysis over the active session

OTHER:
  /status          - Show current panel and session status
  /help, /?        - Show this help
  /quit, /exit     - Exit the session

Anything else is sent to the chat endpoint as a prompt.
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_panel_command() {
        assert_eq!(
            parse_special_command("/panel spores").unwrap(),
            SpecialCommand::SwitchPanel(Panel::Spores)
        );
        assert_eq!(
            parse_special_command("/panel throttle").unwrap(),
            SpecialCommand::SwitchPanel(Panel::Throttle)
        );
    }

    #[test]
    fn test_parse_panel_shorthands() {
        assert_eq!(
            parse_special_command("/spiral").unwrap(),
            SpecialCommand::SwitchPanel(Panel::Spiral)
        );
        assert_eq!(
            parse_special_command("/throttle").unwrap(),
            SpecialCommand::SwitchPanel(Panel::Throttle)
        );
    }

    #[test]
    fn test_parse_panel_missing_argument() {
        assert!(matches!(
            parse_special_command("/panel"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_panel_unsupported_argument() {
        assert!(matches!(
            parse_special_command("/panel vortex"),
            Err(CommandError::UnsupportedArgument { .. })
        ));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_special_command("/new").unwrap(), SpecialCommand::NewSession);
        assert_eq!(parse_special_command("/clear").unwrap(), SpecialCommand::ClearAll);
        assert_eq!(parse_special_command("/export").unwrap(), SpecialCommand::Export);
        assert_eq!(parse_special_command("/analyze").unwrap(), SpecialCommand::Analyze);
        assert_eq!(parse_special_command("/history").unwrap(), SpecialCommand::History);
    }

    #[test]
    fn test_parse_status_and_help() {
        assert_eq!(parse_special_command("/status").unwrap(), SpecialCommand::ShowStatus);
        assert_eq!(parse_special_command("/help").unwrap(), SpecialCommand::Help);
        assert_eq!(parse_special_command("/?").unwrap(), SpecialCommand::Help);
    }

    #[test]
    fn test_parse_exit_variants() {
        assert_eq!(parse_special_command("/quit").unwrap(), SpecialCommand::Exit);
        assert_eq!(parse_special_command("/exit").unwrap(), SpecialCommand::Exit);
        assert_eq!(parse_special_command("exit").unwrap(), SpecialCommand::Exit);
        assert_eq!(parse_special_command("QUIT").unwrap(), SpecialCommand::Exit);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            parse_special_command("/PANEL SPORES").unwrap(),
            SpecialCommand::SwitchPanel(Panel::Spores)
        );
        assert_eq!(parse_special_command("/Help").unwrap(), SpecialCommand::Help);
    }

    #[test]
    fn test_regular_prompt_is_not_a_command() {
        assert_eq!(
            parse_special_command("hello there").unwrap(),
            SpecialCommand::None
        );
        assert_eq!(
            parse_special_command("what is /panel?").unwrap(),
            SpecialCommand::None
        );
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(matches!(
            parse_special_command("/frobnicate"),
            Err(CommandError::UnknownCommand(_))
        ));
    }
}
