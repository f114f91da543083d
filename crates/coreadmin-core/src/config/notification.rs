//! Outbound notification configuration.

use serde::{Deserialize, Serialize};

/// Settings for the notifier adapters.
///
/// Both adapters are optional; an unset URL disables the corresponding
/// notifier at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Chat webhook endpoint for operational messages.
    #[serde(default)]
    pub chat_webhook_url: Option<String>,
    /// HTTP mail relay endpoint.
    #[serde(default)]
    pub mail_relay_url: Option<String>,
    /// Bearer token for the mail relay.
    #[serde(default)]
    pub mail_relay_token: Option<String>,
    /// Sender address for relayed mail.
    #[serde(default = "default_mail_from")]
    pub mail_from: String,
}

fn default_mail_from() -> String {
    "noreply@localhost".to_string()
}
