use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::NotificationMessage;

/// Client for the Telegram Bot API `sendMessage` call. The base URL is
/// injectable so tests can stand in a local mock server.
pub struct TelegramClient {
    http_client: Client,
    base_url: String,
    bot_token: SecretString,
    chat_id: String,
}

/// How a dispatch attempt failed. `Ok(())` from [`TelegramClient::send_message`]
/// means delivered; any 2xx acknowledgement counts, without inspecting the
/// body's `ok` flag.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("telegram rejected the message: {0}")]
    Rejected(String),
    #[error("failed to reach telegram: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        // The request path embeds the bot token; strip the url before the
        // error text can reach a log line.
        Self::Transport(e.without_url().to_string())
    }
}

#[derive(serde::Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(serde::Deserialize)]
struct TelegramApiError {
    description: String,
}

impl TelegramClient {
    pub fn new(
        base_url: String,
        bot_token: SecretString,
        chat_id: String,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            bot_token,
            chat_id,
        }
    }

    /// Fires exactly one `sendMessage` call. No retry: a transport error or
    /// a rejection is reported to the caller and that is the end of it.
    #[tracing::instrument(name = "Dispatching notification to Telegram", skip(self, message))]
    pub async fn send_message(&self, message: &NotificationMessage) -> Result<(), DispatchError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url,
            self.bot_token.expose_secret()
        );
        let request_body = SendMessageRequest {
            chat_id: &self.chat_id,
            text: message.as_ref(),
            parse_mode: "Markdown",
        };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        match response.json::<TelegramApiError>().await {
            Ok(error_body) => Err(DispatchError::Rejected(error_body.description)),
            Err(_) => Err(DispatchError::Transport(format!(
                "telegram responded with status {}",
                status
            ))),
        }
    }
}
