//! Bot token lookup.

use crate::errors::{AppError, AppResult};

/// Primary environment variable holding the bot token.
pub const TOKEN_VAR: &str = "BOT_PearlKiteBot";
/// Checked when [`TOKEN_VAR`] is unset or empty.
pub const TOKEN_VAR_FALLBACK: &str = "BOT_TOKEN";

/// Resolve the bot token from the process environment.
pub fn resolve() -> AppResult<String> {
    resolve_with(|name| std::env::var(name).ok())
}

/// Resolve the bot token through `lookup`; empty values count as unset.
pub fn resolve_with<F>(lookup: F) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    [TOKEN_VAR, TOKEN_VAR_FALLBACK]
        .into_iter()
        .filter_map(&lookup)
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .ok_or(AppError::MissingToken {
            primary: TOKEN_VAR,
            fallback: TOKEN_VAR_FALLBACK,
        })
}
