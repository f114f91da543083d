//! Request DTOs.
//!
//! Create-or-update payloads share one wire format: an absent or zero `id`
//! means create, anything else means update.

use serde::Deserialize;
use validator::Validate;

use coreadmin_core::types::{FormId, LevelId, MenuTreeId, UserId};
use coreadmin_entity::form::{FormRecord, PathApi};
use coreadmin_entity::level::LevelRecord;
use coreadmin_entity::menu::MenuTreeRecord;
use coreadmin_entity::privilege::PrivilegeRecord;
use coreadmin_service::user::UserDraft;

/// `POST /login` body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email)]
    pub email: String,
    /// Plaintext secret.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Create-or-update body for users.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    /// Zero or absent for creates.
    #[serde(default)]
    pub id: Option<UserId>,
    /// Login name.
    #[validate(length(min = 1))]
    pub username: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Full name.
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// New plaintext secret, when changing it.
    #[serde(default)]
    pub password: Option<String>,
    /// Profile picture reference.
    #[serde(default)]
    pub picture: Option<String>,
    /// Assigned access level.
    pub level_id: LevelId,
}

impl UserPayload {
    /// Convert into the service-level draft.
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            id: self.id.filter(|id| id.as_i64() > 0),
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            password: self.password,
            picture: self.picture,
            level_id: self.level_id,
        }
    }
}

/// Create-or-update body for levels.
#[derive(Debug, Deserialize, Validate)]
pub struct LevelPayload {
    /// Zero or absent for creates.
    #[serde(default)]
    pub id: Option<LevelId>,
    /// Level name.
    #[serde(rename = "level")]
    #[validate(length(min = 1))]
    pub name: String,
    /// Description.
    #[validate(length(min = 1))]
    pub description: String,
}

impl LevelPayload {
    /// The target id, when updating.
    pub fn target_id(&self) -> Option<LevelId> {
        self.id.filter(|id| id.as_i64() > 0)
    }

    /// Convert into the persistable record.
    pub fn into_record(self) -> LevelRecord {
        LevelRecord {
            name: self.name,
            description: self.description,
        }
    }
}

/// Create-or-update body for forms.
#[derive(Debug, Deserialize, Validate)]
pub struct FormPayload {
    /// Zero or absent for creates.
    #[serde(default)]
    pub id: Option<FormId>,
    /// Display title.
    #[validate(length(min = 1))]
    pub title: String,
    /// Icon name.
    #[serde(default)]
    pub icon: String,
    /// Frontend link slug.
    #[serde(default)]
    pub link: String,
    /// Accent color.
    #[serde(default)]
    pub color: String,
    /// Ordering index.
    #[serde(rename = "order", default)]
    pub order_index: i32,
    /// Settings-group visibility flag.
    #[serde(default)]
    pub setting: bool,
    /// Intranet-wide visibility flag.
    #[serde(default)]
    pub public_to_intranet: bool,
    /// Optional menu group.
    #[serde(default)]
    pub menu_tree_id: Option<MenuTreeId>,
    /// Route-path aliases.
    #[validate(length(min = 1))]
    pub path_api: String,
}

impl FormPayload {
    /// The target id, when updating.
    pub fn target_id(&self) -> Option<FormId> {
        self.id.filter(|id| id.as_i64() > 0)
    }

    /// Convert into the persistable record.
    pub fn into_record(self) -> FormRecord {
        FormRecord {
            title: self.title,
            icon: self.icon,
            link: self.link,
            color: self.color,
            order_index: self.order_index,
            setting: self.setting,
            public_to_intranet: self.public_to_intranet,
            menu_tree_id: self.menu_tree_id,
            path_api: PathApi::from(self.path_api),
        }
    }
}

/// Create-or-update body for privilege edges.
///
/// No explicit id: the `(level_id, form_id)` pair is the upsert key.
#[derive(Debug, Deserialize)]
pub struct PrivilegePayload {
    /// The owning level.
    pub level_id: LevelId,
    /// The referenced form.
    pub form_id: FormId,
    /// Read grant.
    #[serde(default)]
    pub read: bool,
    /// Write grant.
    #[serde(default)]
    pub write: bool,
}

impl PrivilegePayload {
    /// Convert into the persistable record.
    pub fn into_record(self) -> PrivilegeRecord {
        PrivilegeRecord {
            level_id: self.level_id,
            form_id: self.form_id,
            read: self.read,
            write: self.write,
        }
    }
}

/// Create-or-update body for menu nodes.
#[derive(Debug, Deserialize, Validate)]
pub struct MenuTreePayload {
    /// Zero or absent for creates.
    #[serde(default)]
    pub id: Option<MenuTreeId>,
    /// Display title.
    #[validate(length(min = 1))]
    pub title: String,
    /// Icon name.
    #[serde(default)]
    pub icon: String,
    /// Accent color.
    #[serde(default)]
    pub color: String,
    /// Ordering index.
    #[serde(rename = "order", default)]
    pub order_index: i32,
}

impl MenuTreePayload {
    /// The target id, when updating.
    pub fn target_id(&self) -> Option<MenuTreeId> {
        self.id.filter(|id| id.as_i64() > 0)
    }

    /// Convert into the persistable record.
    pub fn into_record(self) -> MenuTreeRecord {
        MenuTreeRecord {
            title: self.title,
            icon: self.icon,
            color: self.color,
            order_index: self.order_index,
        }
    }
}

/// Body of the `/delete` routes: the id of the row to soft-delete.
#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    /// Target row id.
    pub id: i64,
}

/// `rows` query parameter of the pagination routes.
///
/// Kept as a raw string so an unparsable value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct RowsQuery {
    /// Requested rows per page.
    #[serde(default)]
    pub rows: Option<String>,
}
