//! JWT claims payload representing an authenticated session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coreadmin_core::types::{LevelId, UserId};

/// The decoded, verified payload of a bearer token.
///
/// Never persisted; reconstructed per request from a verified token. The
/// expiry is validated on every decode, so a `Claims` value in hand is
/// always within its validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: UserId,
    /// User email at issuance time.
    pub email: String,
    /// The user's access level at issuance time.
    pub level_id: LevelId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issuer tag.
    pub iss: String,
}

impl Claims {
    /// The user this session belongs to.
    pub fn user_id(&self) -> UserId {
        self.sub
    }

    /// The expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Whether this token has passed its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
