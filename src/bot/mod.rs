//! Telegram front-end: Bot API client, update model, command routing and the
//! long-polling loop.

pub mod api;
pub mod router;
pub mod runner;
pub mod types;

pub use router::{BotCommand, Router};
pub use runner::serve;
