//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token validity window in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Issuer tag embedded in every token.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Maximum failed login attempts per client IP before lockout.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: u32,
    /// Login lockout duration in minutes.
    #[serde(default = "default_lockout")]
    pub lockout_duration_minutes: u64,
    /// Email of the administrator account created on first startup.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Initial password of the administrator account.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            issuer: default_issuer(),
            max_failed_attempts: default_max_failed(),
            lockout_duration_minutes: default_lockout(),
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    72
}

fn default_issuer() -> String {
    "Coreadmin Intranet API".to_string()
}

fn default_max_failed() -> u32 {
    5
}

fn default_lockout() -> u64 {
    15
}

fn default_admin_email() -> String {
    "admin@drossan.com".to_string()
}

fn default_admin_password() -> String {
    "CHANGE_ME_ON_FIRST_LOGIN".to_string()
}
