//! Outbound notification capability.
//!
//! Notifiers are external collaborators; the application only depends on
//! this interface and treats delivery as fire-and-forget.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A rich attachment block for channels that support them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment title.
    pub title: String,
    /// Body text.
    pub text: String,
    /// Accent color hint.
    pub color: String,
    /// Key/value fields rendered with the attachment.
    pub fields: Vec<AttachmentField>,
}

/// A single key/value field inside an [`Attachment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Field label.
    pub title: String,
    /// Field value.
    pub value: String,
    /// Whether the field may share a row with another.
    pub short: bool,
}

/// A destination capable of delivering operational messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a plain text message.
    async fn send(&self, message: &str) -> AppResult<()>;

    /// Send a message composed of rich attachments.
    async fn send_with_attachments(&self, attachments: &[Attachment]) -> AppResult<()>;

    /// Render the named template with `data` and send the result.
    ///
    /// Notifiers without template support may treat this as a no-op.
    async fn send_with_template(&self, template: &str, data: &serde_json::Value) -> AppResult<()>;
}
