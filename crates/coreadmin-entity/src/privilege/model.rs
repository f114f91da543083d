//! Level-privilege edge model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use coreadmin_core::types::{FormId, LevelId, PrivilegeId};

/// The many-to-many edge between a level and a form, carrying the two
/// independent grant flags. At most one live edge exists per
/// `(level_id, form_id)` pair; create-or-update upserts on that pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LevelPrivilege {
    /// Unique edge identifier.
    pub id: PrivilegeId,
    /// The owning level.
    pub level_id: LevelId,
    /// The referenced form.
    pub form_id: FormId,
    /// Grants GET-class requests.
    pub read: bool,
    /// Grants POST/PUT/DELETE-class requests.
    pub write: bool,
    /// When the edge was created.
    pub created_at: DateTime<Utc>,
    /// When the edge was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The persistable fields of a privilege edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrivilegeRecord {
    /// The owning level.
    pub level_id: LevelId,
    /// The referenced form.
    pub form_id: FormId,
    /// Read grant.
    pub read: bool,
    /// Write grant.
    pub write: bool,
}
