//! Access level entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use coreadmin_core::types::{LevelId, PrivilegeId};

use crate::form::Form;

/// A named role carrying a set of form-scoped read/write grants.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Level {
    /// Unique level identifier.
    pub id: LevelId,
    /// Unique level name.
    #[serde(rename = "level")]
    pub name: String,
    /// Unique description.
    pub description: String,
    /// When the level was created.
    pub created_at: DateTime<Utc>,
    /// When the level was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The persistable fields of a level, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Level name.
    pub name: String,
    /// Description.
    pub description: String,
}

/// One privilege edge of a level, joined with the form it grants access to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormGrant {
    /// The privilege edge id.
    pub privilege_id: PrivilegeId,
    /// The granted form.
    pub form: Form,
    /// Whether GET-class requests are allowed.
    pub read: bool,
    /// Whether POST/PUT/DELETE-class requests are allowed.
    pub write: bool,
}

/// A level together with its privilege edges and their forms.
///
/// This is the deep read the authorization engine performs per request:
/// one level row plus every `(privilege, form)` pair belonging to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDetail {
    /// The level itself.
    #[serde(flatten)]
    pub level: Level,
    /// Privilege edges in stored order.
    pub privileges: Vec<FormGrant>,
}

impl LevelDetail {
    /// A detail view with no privilege edges.
    pub fn bare(level: Level) -> Self {
        Self {
            level,
            privileges: Vec::new(),
        }
    }
}
