//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use coreadmin_core::types::{LevelId, UserId};

/// A registered intranet user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Human-readable full name.
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Profile picture reference.
    pub picture: Option<String>,
    /// The access level this user belongs to.
    pub level_id: LevelId,
    /// Number of consecutive failed login attempts.
    pub failed_logins: i32,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; a set value hides the row from every read.
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The persistable fields of a user, used for both create and update.
///
/// `password_hash` is always the resolved hash: freshly computed when a new
/// secret was supplied, otherwise carried over from the stored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Resolved Argon2id hash.
    pub password_hash: String,
    /// Profile picture reference.
    pub picture: Option<String>,
    /// Assigned access level.
    pub level_id: LevelId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = User {
            id: UserId(1),
            username: "ana".into(),
            email: "ana@example.com".into(),
            full_name: "Ana Admin".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            picture: None,
            level_id: LevelId(1),
            failed_logins: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("argon2id"));
        assert!(json.contains("\"fullname\":\"Ana Admin\""));
    }
}
