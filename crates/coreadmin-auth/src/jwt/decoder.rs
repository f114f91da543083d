//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use coreadmin_core::config::auth::AuthConfig;
use coreadmin_core::error::AppError;

use super::claims::Claims;

/// Why a presented token was rejected.
///
/// Callers need the distinction: an expired token means "log in again",
/// anything else is rejected outright. Both map to the same HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's expiry has elapsed.
    #[error("token expired")]
    Expired,
    /// Bad signature or malformed payload.
    #[error("invalid token")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}

/// Validates bearer tokens back into [`Claims`].
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string: signature first, then expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use coreadmin_core::types::{LevelId, UserId};

    use super::*;
    use crate::jwt::encoder::JwtEncoder;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn round_trip_preserves_identity() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let token = encoder
            .issue(UserId(7), "a@b.com", LevelId(2))
            .expect("issue");
        let claims = decoder.decode(&token).expect("decode");

        assert_eq!(claims.sub, UserId(7));
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.level_id, LevelId(2));

        // Expiry lands ~72h out, give or take a few seconds of test runtime.
        let expected = Utc::now().timestamp() + 72 * 3600;
        assert!((claims.exp - expected).abs() < 10);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let mut token = encoder
            .issue(UserId(1), "x@y.com", LevelId(1))
            .expect("issue");
        token.push('x');

        assert_eq!(decoder.decode(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let token = encoder
            .issue(UserId(1), "x@y.com", LevelId(1))
            .expect("issue");
        assert_eq!(decoder.decode(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn expired_token_is_distinguishable() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: UserId(1),
            email: "x@y.com".to_string(),
            level_id: LevelId(1),
            iat: now - 7200,
            exp: now - 3600,
            iss: config.issuer.clone(),
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .expect("encode");

        assert_eq!(decoder.decode(&token).unwrap_err(), TokenError::Expired);
    }
}
