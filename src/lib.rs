//! PearlKite library root.
//! Exposes the CLI parser, the high-level run() function, the event-log core
//! and the Telegram bot.

pub mod bot;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Serve => cli::commands::serve::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging: the bot is chatty, one-shot commands only report problems
    let level = if matches!(cli.command, Commands::Serve) {
        "info"
    } else {
        "warn"
    };
    telemetry::init(level);

    // 3️⃣ load config once
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(&utils::path::expand_tilde(path))?,
        None => Config::load()?,
    };

    // 4️⃣ command-line override of the event log
    if let Some(custom) = &cli.events {
        cfg.events_path = custom.clone();
    }

    dispatch(&cli, &cfg)
}
