//! Joojit - Terminal chat client
//!
//! Main entry point for the Joojit application.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use joojit::cli::{Cli, Commands, SessionCommand};
use joojit::commands;
use joojit::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();

    // Mirror a CLI ledger path into JOOJIT_LEDGER_PATH so the ledger
    // initializer can pick it up wherever it is opened.
    if let Some(ledger_path) = &cli.ledger_path {
        std::env::set_var("JOOJIT_LEDGER_PATH", ledger_path);
        tracing::info!("Using ledger override from CLI: {}", ledger_path);
    }

    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let mut config = Config::load(config_path)?;

    if let Some(base) = &cli.base {
        config.endpoints.base = Some(base.clone());
    }

    config.validate()?;

    match cli.command {
        Commands::Chat { panel } => {
            tracing::info!("Starting interactive chat mode");
            if let Some(p) = &panel {
                tracing::debug!("Using panel override: {}", p);
            }
            commands::chat::run_chat(config, panel).await?;
            Ok(())
        }
        Commands::Sessions { command } => match command {
            SessionCommand::List => {
                commands::sessions::list_sessions()?;
                Ok(())
            }
            SessionCommand::Clear { yes } => {
                commands::sessions::clear_sessions(yes)?;
                Ok(())
            }
        },
        Commands::Export { output } => {
            tracing::info!("Exporting active session");
            commands::export::run_export(&config, output).await?;
            Ok(())
        }
        Commands::Analyze => {
            tracing::info!("Analyzing active session");
            commands::analyze::run_analyze(&config).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("joojit=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
