use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{ListLimits, ListLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, listing_row};
use crate::ui::replies;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { count } = cmd {
        let limits = ListLimits {
            default: cfg.list_default,
            max: cfg.list_max,
        };
        let log = cfg.event_log();
        let records = ListLogic::recent(&log, count.as_deref(), limits)?;

        if records.is_empty() {
            info(replies::NO_RECORDS);
            return Ok(());
        }

        println!("Последние записи ({}):", log.path().display());
        for (i, record) in records.iter().enumerate() {
            println!("{}", listing_row(i + 1, record));
        }
    }
    Ok(())
}
