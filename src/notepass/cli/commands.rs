//! # CLI Layer
//!
//! The terminal front end. This is the only place that:
//! - parses process arguments (clap)
//! - sets up logging and color
//! - decides between an interactive terminal and piped input
//! - prints to stdout
//!
//! Everything it shows comes from [`NotepassApi`] as a `CmdResult`.

use super::input::{PipedInput, TerminalInput};
use super::render::print_result;
use super::repl::Session;
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use notepass::api::{ConfigAction, NotepassApi};
use notepass::config::{config_dir, NotepassConfig};
use notepass::error::Result;
use notepass::store::{NoteStore, PasswordStore};
use std::io::IsTerminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(key, value),
        Some(Commands::Repl) | None => handle_session(),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "notepass=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> NotepassConfig {
    let loaded = config_dir().and_then(NotepassConfig::load);
    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("using default config: {}", e);
            NotepassConfig::default()
        }
    }
}

fn handle_session() -> Result<()> {
    let config = load_config();
    let api = NotepassApi::new(NoteStore::new(), PasswordStore::new())
        .with_listing_after_change(config.show_listing_after_change);

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        println!(
            "{} {}",
            "notepass".bold(),
            "- notes and passwords, kept in memory until you quit. Type 'help' for commands.".dimmed()
        );
        let input = TerminalInput::new(config.mask_passwords)?;
        Session::new(api, input, config.prompt).run()
    } else {
        Session::new(api, PipedInput::new(stdin.lock()), config.prompt).run()
    }
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let dir = config_dir()?;
    let result = NotepassApi::default().config(&dir, action)?;
    print_result(&result);
    Ok(())
}
