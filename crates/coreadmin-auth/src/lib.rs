//! Authentication and authorization for the intranet backend: JWT issuance
//! and validation, Argon2id credential hashing, the per-request
//! authorization engine, and the login throttle.

pub mod authorize;
pub mod jwt;
pub mod password;
pub mod throttle;

pub use authorize::{AccessDecision, AuthorizationEngine, DenyReason};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
pub use throttle::LoginThrottle;
