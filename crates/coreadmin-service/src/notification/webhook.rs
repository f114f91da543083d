//! Chat webhook notifier.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use coreadmin_core::error::AppError;
use coreadmin_core::result::AppResult;
use coreadmin_core::traits::{Attachment, Notifier};

/// Delivers messages to a chat service through an incoming-webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookNotifier {
    /// Create a notifier posting to the given webhook URL.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    async fn post(&self, body: serde_json::Value) -> AppResult<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Webhook delivery failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Webhook returned status {}",
                response.status()
            )));
        }

        info!("Notification delivered to chat webhook");
        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &str) -> AppResult<()> {
        self.post(json!({ "text": message })).await
    }

    async fn send_with_attachments(&self, attachments: &[Attachment]) -> AppResult<()> {
        let blocks: Vec<serde_json::Value> = attachments
            .iter()
            .map(|a| {
                json!({
                    "title": a.title,
                    "text": a.text,
                    "color": a.color,
                    "fields": a.fields.iter().map(|f| json!({
                        "title": f.title,
                        "value": f.value,
                        "short": f.short,
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();

        self.post(json!({ "attachments": blocks })).await
    }

    /// Chat webhooks have no template support; templated sends are no-ops.
    async fn send_with_template(
        &self,
        _template: &str,
        _data: &serde_json::Value,
    ) -> AppResult<()> {
        Ok(())
    }
}
