//! Long-polling loop: fetch updates, handle each one on its own task.

use crate::bot::api::TelegramClient;
use crate::bot::router::Router;
use crate::bot::types::Update;
use crate::config::Config;
use crate::core::list::ListLimits;
use crate::errors::AppResult;
use crate::telemetry::spans;
use crate::ui::replies;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{Instrument, error, info, warn};

/// Pause after a failed `getUpdates` before polling again.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Run the bot until Ctrl-C.
pub async fn serve(cfg: &Config, token: &str) -> AppResult<()> {
    let client = TelegramClient::new(&cfg.api_url, token, cfg.poll_timeout_secs)?;

    let username = match client.get_me_username().await {
        Ok(name) => name,
        Err(e) => {
            warn!(error = %e, "getMe failed, accepting commands addressed to any bot");
            None
        }
    };

    let limits = ListLimits {
        default: cfg.list_default,
        max: cfg.list_max,
    };
    let router = Arc::new(Router::new(cfg.event_log(), limits).with_bot_username(username.clone()));

    info!(
        bot = username.as_deref().unwrap_or("?"),
        events = %router.log().path().display(),
        "PearlKite bot started"
    );

    let mut offset = 0;
    let mut in_flight = JoinSet::new();
    loop {
        // reap finished handlers so the set does not grow unbounded
        while in_flight.try_join_next().is_some() {}

        let updates = tokio::select! {
            res = client.get_updates(offset) => res,
            _ = tokio::signal::ctrl_c() => {
                info!(pending = in_flight.len(), "shutdown requested, finishing pending replies");
                drain(&mut in_flight).await;
                return Ok(());
            }
        };

        let updates = match updates {
            Ok(u) => u,
            Err(e) => {
                warn!(error = %e, "polling failed, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let client = client.clone();
            let router = Arc::clone(&router);
            in_flight.spawn(handle_update(client, router, update));
        }
    }
}

/// Wait for every spawned handler; returns how many were still pending.
pub async fn drain(in_flight: &mut JoinSet<()>) -> usize {
    let mut finished = 0;
    while let Some(res) = in_flight.join_next().await {
        if let Err(e) = res {
            error!(error = %e, "handler task failed during shutdown");
        }
        finished += 1;
    }
    finished
}

async fn handle_update(client: TelegramClient, router: Arc<Router>, update: Update) {
    let Some(message) = update.effective_message().cloned() else {
        return;
    };
    let chat_id = message.chat.id;
    let message_id = message.message_id;
    let span = spans::update(update.update_id, chat_id);

    async move {
        // file I/O stays off the async workers
        let outcome = tokio::task::spawn_blocking(move || router.handle(&message)).await;

        let reply = match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                error!(error = %e, "command failed");
                Some(replies::INTERNAL_ERROR.to_string())
            }
            Err(e) => {
                error!(error = %e, "command task panicked");
                Some(replies::INTERNAL_ERROR.to_string())
            }
        };

        if let Some(text) = reply
            && let Err(e) = client.send_message(chat_id, &text, Some(message_id)).await
        {
            warn!(error = %e, "reply not delivered");
        }
    }
    .instrument(span)
    .await
}
