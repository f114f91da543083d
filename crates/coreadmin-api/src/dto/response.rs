//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Successful login envelope: `{"status": 200, "data": {"token": "…"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Mirrors the HTTP status for legacy clients.
    pub status: u16,
    /// Token payload.
    pub data: TokenData,
}

/// The issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    /// Signed JWT.
    pub token: String,
}

/// Result of a delete route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether a live row was marked deleted.
    pub deleted: bool,
}
