//! Notification registry.
//!
//! Holds named [`Notifier`] implementations and fans a message out to the
//! requested subset. Unknown names are skipped silently so callers can name
//! notifiers that may be disabled by configuration.

use std::collections::HashMap;
use std::sync::Arc;

use coreadmin_core::result::AppResult;
use coreadmin_core::traits::{Attachment, Notifier};

/// Registry of named notifiers.
#[derive(Default)]
pub struct NotificationService {
    notifiers: HashMap<String, Arc<dyn Notifier>>,
}

impl NotificationService {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notifier under a name, replacing any previous holder.
    pub fn register(&mut self, name: impl Into<String>, notifier: Arc<dyn Notifier>) {
        self.notifiers.insert(name.into(), notifier);
    }

    /// Send a plain message through each named notifier.
    pub async fn send(&self, names: &[&str], message: &str) -> AppResult<()> {
        for name in names {
            if let Some(notifier) = self.notifiers.get(*name) {
                notifier.send(message).await?;
            }
        }
        Ok(())
    }

    /// Send rich attachments through each named notifier.
    pub async fn send_with_attachments(
        &self,
        names: &[&str],
        attachments: &[Attachment],
    ) -> AppResult<()> {
        for name in names {
            if let Some(notifier) = self.notifiers.get(*name) {
                notifier.send_with_attachments(attachments).await?;
            }
        }
        Ok(())
    }

    /// Send a templated message through each named notifier.
    pub async fn send_with_template(
        &self,
        names: &[&str],
        template: &str,
        data: &serde_json::Value,
    ) -> AppResult<()> {
        for name in names {
            if let Some(notifier) = self.notifiers.get(*name) {
                notifier.send_with_template(template, data).await?;
            }
        }
        Ok(())
    }
}
