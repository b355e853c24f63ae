use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddOutcome, Origin};
use crate::errors::{AppError, AppResult};
use crate::models::user::UserProfile;
use crate::ui::messages::{error, success};
use crate::ui::replies;

/// Register a kite session from the terminal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        params,
        name,
        chat,
        user,
    } = cmd
    {
        //
        // 1. Reporter identity (no profile lookup in the terminal)
        //
        let reporter = name
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "cli".to_string());

        let origin = Origin {
            chat_id: chat.clone(),
            user: Some(UserProfile {
                id: *user,
                first_name: Some(reporter),
                ..UserProfile::default()
            }),
        };

        //
        // 2. Parse + append
        //
        let log = cfg.event_log();
        let text = params.join(" ");

        match AddLogic::apply(&log, &text, &origin)? {
            AddOutcome::Saved(record) => {
                success(replies::saved_text(&record, log.path()));
            }
            AddOutcome::Missing(missing) => {
                error(replies::usage_text(&missing));
                return Err(AppError::MissingParams(
                    missing.iter().map(|k| k.as_str().to_string()).collect(),
                ));
            }
        }
    }

    Ok(())
}
