//! Form entity model: a path-addressable protected resource descriptor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use coreadmin_core::types::{FormId, MenuTreeId};

use super::path_api::PathApi;

/// One screen or API surface of the application, referenced by privilege
/// edges and joined to inbound requests through its [`PathApi`] aliases.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Form {
    /// Unique form identifier.
    pub id: FormId,
    /// Display title.
    pub title: String,
    /// Icon name for the menu.
    pub icon: String,
    /// Frontend link slug.
    pub link: String,
    /// Accent color.
    pub color: String,
    /// Ordering index within its menu group.
    #[serde(rename = "order")]
    pub order_index: i32,
    /// Whether the form is shown in the settings group.
    pub setting: bool,
    /// Whether the form is visible to every intranet user.
    pub public_to_intranet: bool,
    /// Optional expandable-menu group this form belongs to.
    pub menu_tree_id: Option<MenuTreeId>,
    /// Route-path aliases governed by this form.
    pub path_api: PathApi,
    /// When the form was created.
    pub created_at: DateTime<Utc>,
    /// When the form was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The persistable fields of a form, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRecord {
    /// Display title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Frontend link slug.
    pub link: String,
    /// Accent color.
    pub color: String,
    /// Ordering index.
    pub order_index: i32,
    /// Settings-group visibility flag.
    pub setting: bool,
    /// Intranet-wide visibility flag.
    pub public_to_intranet: bool,
    /// Optional menu group.
    pub menu_tree_id: Option<MenuTreeId>,
    /// Route-path aliases.
    pub path_api: PathApi,
}
