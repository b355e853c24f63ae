use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode or when it already exists)
///  - the event log file and its directory
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = match &cli.config {
        Some(custom) => crate::utils::path::expand_tilde(custom),
        None => Config::config_file(),
    };

    println!("⚙️  Initializing PearlKite…");

    if cli.test {
        info("Test mode: configuration file not written");
    } else if path.exists() {
        info(format!("Config file : {} (kept)", path.display()));
    } else {
        cfg.save_to(&path)?;
        success(format!("Config file : {}", path.display()));
    }

    let log = cfg.event_log();
    log.ensure()?;
    success(format!("Event log   : {}", log.path().display()));

    Ok(())
}
