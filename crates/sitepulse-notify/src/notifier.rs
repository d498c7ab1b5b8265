//! The `Notify` capability and its Discord webhook implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use pulse_core::Notification;

/// Footer shown under every embed.
const FOOTER_TEXT: &str = "Notifications fire only on status change";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Alert delivery capability.
///
/// `deliver` has no error path: implementations absorb their own
/// failures, so the cycle runner treats every call as having succeeded
/// and is never stalled by an unwell alert channel.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver one alert.
    async fn deliver(&self, notification: &Notification);
}

/// Posts notifications to a Discord webhook as embeds.
pub struct DiscordNotifier {
    /// Target webhook; `None` drops every notification with an error log.
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl DiscordNotifier {
    /// Create a notifier for the given webhook URL.
    ///
    /// Passing `None` (webhook secret not configured) yields a notifier
    /// that logs and drops every alert instead of failing the run.
    pub fn new(webhook_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build webhook HTTP client");
        Self { webhook_url, client }
    }
}

#[async_trait]
impl Notify for DiscordNotifier {
    async fn deliver(&self, notification: &Notification) {
        let Some(url) = &self.webhook_url else {
            error!("DISCORD_WEBHOOK_URL is not set, dropping notification");
            return;
        };

        let payload = serde_json::json!({ "embeds": [embed(notification)] });

        match self.client.post(url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(title = %notification.title, "notification delivered");
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                error!(%status, body = %body, "discord webhook rejected notification");
            }
            Err(e) => {
                error!(error = %e, "failed to deliver discord notification");
            }
        }
    }
}

/// Discord embed object for one notification.
fn embed(notification: &Notification) -> serde_json::Value {
    serde_json::json!({
        "title": notification.title,
        "description": notification.description,
        "url": notification.url,
        "color": notification.color,
        "timestamp": notification.timestamp.to_rfc3339(),
        "footer": { "text": FOOTER_TEXT },
    })
}
