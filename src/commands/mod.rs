/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four top-level command modules:

- `chat`     — Interactive chat loop with panel switching
- `sessions` — List or clear stored sessions
- `export`   — Export the active session to a `.jsonl` file
- `analyze`  — Run semantic analysis over the active session

These handlers are intentionally small and use the library components:
the session ledger, the panel controller, and the endpoint clients.
*/

pub mod analyze;
pub mod chat;
pub mod export;
pub mod sessions;

// Slash-command parser for the chat loop
pub mod special_commands;
