//! Capability traits shared across crates.

pub mod notifier;

pub use notifier::{Attachment, AttachmentField, Notifier};
