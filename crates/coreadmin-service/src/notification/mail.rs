//! HTTP mail-relay notifier.
//!
//! Delivers mail through an HTTP relay API rather than speaking SMTP
//! directly; the relay renders server-side templates when asked to.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use coreadmin_core::error::AppError;
use coreadmin_core::result::AppResult;
use coreadmin_core::traits::{Attachment, Notifier};

/// Delivers operational mail through an HTTP relay endpoint.
#[derive(Debug, Clone)]
pub struct MailRelayNotifier {
    client: reqwest::Client,
    relay_url: String,
    api_token: Option<String>,
    from: String,
}

impl MailRelayNotifier {
    /// Create a notifier posting to the given relay endpoint.
    pub fn new(
        relay_url: impl Into<String>,
        api_token: Option<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url: relay_url.into(),
            api_token,
            from: from.into(),
        }
    }

    async fn post(&self, body: serde_json::Value) -> AppResult<()> {
        let mut request = self.client.post(&self.relay_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Mail relay delivery failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Mail relay returned status {}",
                response.status()
            )));
        }

        info!("Notification delivered to mail relay");
        Ok(())
    }
}

#[async_trait]
impl Notifier for MailRelayNotifier {
    async fn send(&self, message: &str) -> AppResult<()> {
        self.post(json!({
            "from": self.from,
            "subject": "Intranet notification",
            "text": message,
        }))
        .await
    }

    async fn send_with_attachments(&self, attachments: &[Attachment]) -> AppResult<()> {
        let body = attachments
            .iter()
            .map(|a| format!("{}\n{}", a.title, a.text))
            .collect::<Vec<_>>()
            .join("\n\n");

        self.post(json!({
            "from": self.from,
            "subject": "Intranet notification",
            "text": body,
        }))
        .await
    }

    async fn send_with_template(&self, template: &str, data: &serde_json::Value) -> AppResult<()> {
        self.post(json!({
            "from": self.from,
            "template": template,
            "variables": data,
        }))
        .await
    }
}
