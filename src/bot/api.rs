//! Minimal Telegram Bot API client over HTTPS.

use crate::bot::types::{ApiResponse, Update};
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;

/// Slack added on top of the long-poll timeout before the HTTP request gives up.
const HTTP_GRACE: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base: String,
    poll_timeout: u64,
}

impl TelegramClient {
    pub fn new(api_url: &str, token: &str, poll_timeout: u64) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(poll_timeout) + HTTP_GRACE)
            .build()?;

        Ok(Self {
            http,
            base: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
            poll_timeout,
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: Value) -> AppResult<T> {
        let url = format!("{}/{}", self.base, method);
        let response: ApiResponse<T> = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        match (response.ok, response.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(AppError::Telegram(format!(
                "{} failed ({}): {}",
                method,
                response.error_code.unwrap_or_default(),
                response.description.unwrap_or_else(|| "no description".into())
            ))),
        }
    }

    /// Long-poll for updates with an id of at least `offset`.
    pub async fn get_updates(&self, offset: i64) -> AppResult<Vec<Update>> {
        self.call(
            "getUpdates",
            json!({
                "offset": offset,
                "timeout": self.poll_timeout,
                "allowed_updates": [
                    "message",
                    "edited_message",
                    "channel_post",
                    "edited_channel_post",
                ],
            }),
        )
        .await
    }

    /// Send `text` to `chat_id`, threaded under `reply_to` when given.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> AppResult<()> {
        let mut body = json!({ "chat_id": chat_id, "text": text });
        if let Some(id) = reply_to {
            body["reply_parameters"] = json!({
                "message_id": id,
                "allow_sending_without_reply": true,
            });
        }

        let _: Value = self.call("sendMessage", body).await?;
        Ok(())
    }

    /// Identity of the bot, used to recognize `/command@botname`.
    pub async fn get_me_username(&self) -> AppResult<Option<String>> {
        let me: Value = self.call("getMe", json!({})).await?;
        Ok(me
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}
