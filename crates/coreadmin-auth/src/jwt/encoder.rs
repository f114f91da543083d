//! JWT token creation with configurable signing key, TTL, and issuer.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use coreadmin_core::config::auth::AuthConfig;
use coreadmin_core::error::AppError;
use coreadmin_core::types::{LevelId, UserId};

use super::claims::Claims;

/// Creates signed bearer tokens for authenticated users.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    token_ttl_hours: i64,
    /// Issuer tag embedded in every token.
    issuer: String,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_hours: config.token_ttl_hours as i64,
            issuer: config.issuer.clone(),
        }
    }

    /// Signs a token carrying the given verified identity.
    pub fn issue(
        &self,
        user_id: UserId,
        email: &str,
        level_id: LevelId,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            level_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
