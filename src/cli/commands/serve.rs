use crate::bot;
use crate::config::{Config, token};
use crate::errors::AppResult;

/// Handle the `serve` command: resolve the token, then run the bot loop.
pub fn handle(cfg: &Config) -> AppResult<()> {
    // fail before any network or file activity
    let token = token::resolve()?;

    cfg.event_log().ensure()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(bot::serve(cfg, &token))
}
