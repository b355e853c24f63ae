//! Unified application error type.
//! All modules (core, bot, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Event log
    // ---------------------------
    #[error("Record serialization error: {0}")]
    Record(#[from] csv::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Missing parameters: {}", .0.join(", "))]
    MissingParams(Vec<String>),

    // ---------------------------
    // Bot transport
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error: {0}")]
    Telegram(String),

    #[error("Bot token not set: export {primary} (or {fallback}) first")]
    MissingToken {
        primary: &'static str,
        fallback: &'static str,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
