//! Expandable menu tree model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use coreadmin_core::types::MenuTreeId;

/// A collapsible menu group that forms may be attached to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuTree {
    /// Unique menu identifier.
    pub id: MenuTreeId,
    /// Display title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Accent color.
    pub color: String,
    /// Ordering index.
    #[serde(rename = "order")]
    pub order_index: i32,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
    /// When the menu was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The persistable fields of a menu tree node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTreeRecord {
    /// Display title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Accent color.
    pub color: String,
    /// Ordering index.
    pub order_index: i32,
}
