//! Maps incoming messages to commands and builds the reply text.

use crate::bot::types::Message;
use crate::core::add::{AddLogic, AddOutcome, Origin};
use crate::core::events::EventLog;
use crate::core::list::{ListLimits, ListLogic};
use crate::errors::AppResult;
use crate::models::user::UserProfile;
use crate::ui::replies;
use tracing::debug;

/// Commands the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// `/go_kite`, `/idu_katatsya`, `/иду_кататься`
    Register,
    /// `/list [N]`
    List,
    /// `/start`, `/help`
    Help,
}

impl BotCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "go_kite" | "idu_katatsya" | "иду_кататься" => Some(BotCommand::Register),
            "list" => Some(BotCommand::List),
            "start" | "help" => Some(BotCommand::Help),
            _ => None,
        }
    }
}

/// A `/name[@bot] args` message split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub name: &'a str,
    pub target: Option<&'a str>,
    pub args: &'a str,
}

/// Split a slash command. Whitespace right after the slash is tolerated;
/// `args` is everything after the command token, trimmed.
pub fn split_command(text: &str) -> Option<CommandLine<'_>> {
    let rest = text.strip_prefix('/')?.trim_start();

    let (token, args) = match rest.find(char::is_whitespace) {
        Some(i) => (&rest[..i], rest[i..].trim()),
        None => (rest, ""),
    };
    if token.is_empty() {
        return None;
    }

    let (name, target) = match token.split_once('@') {
        Some((n, t)) => (n, Some(t)),
        None => (token, None),
    };

    Some(CommandLine { name, target, args })
}

#[derive(Debug, Clone)]
pub struct Router {
    log: EventLog,
    limits: ListLimits,
    bot_username: Option<String>,
}

impl Router {
    pub fn new(log: EventLog, limits: ListLimits) -> Self {
        Self {
            log,
            limits,
            bot_username: None,
        }
    }

    /// Only answer `/cmd@name` when `name` is this bot.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    fn addressed_to_us(&self, target: Option<&str>) -> bool {
        match (target, self.bot_username.as_deref()) {
            (Some(t), Some(me)) => t.eq_ignore_ascii_case(me),
            _ => true,
        }
    }

    /// Reply for `message`, or `None` when the bot stays silent.
    pub fn handle(&self, message: &Message) -> AppResult<Option<String>> {
        let Some(body) = message.body() else {
            return Ok(None);
        };

        let Some(line) = split_command(body) else {
            // plain text is echoed; captions without a command are not
            return Ok(message.text.clone());
        };

        if !self.addressed_to_us(line.target) {
            debug!(command = line.name, target = ?line.target, "command for another bot");
            return Ok(None);
        }

        let Some(command) = BotCommand::from_name(line.name) else {
            debug!(command = line.name, "unknown command ignored");
            return Ok(None);
        };
        debug!(?command, chat_id = message.chat.id, "dispatching");

        let reply = match command {
            BotCommand::Help => replies::help_text(),
            BotCommand::Register => {
                let origin = Origin {
                    chat_id: message.chat.id.to_string(),
                    user: message.from.as_ref().map(UserProfile::from),
                };
                match AddLogic::apply(&self.log, line.args, &origin)? {
                    AddOutcome::Saved(record) => replies::saved_text(&record, self.log.path()),
                    AddOutcome::Missing(missing) => replies::usage_text(&missing),
                }
            }
            BotCommand::List => {
                let arg = Some(line.args).filter(|a| !a.is_empty());
                let records = ListLogic::recent(&self.log, arg, self.limits)?;
                replies::list_text(&records)
            }
        };

        Ok(Some(reply))
    }
}
