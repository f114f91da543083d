//! `AuthClaims` extractor: the typed handle to the verified session.
//!
//! Handlers receive claims as an explicit parameter instead of fishing an
//! untyped value out of a request context. When the authorization
//! middleware already decoded the token, its claims are reused from the
//! request extensions; otherwise the bearer header is decoded here.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use coreadmin_auth::jwt::Claims;
use coreadmin_core::error::AppError;

use crate::state::AppState;

/// Verified claims of the authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl std::ops::Deref for AuthClaims {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Pull the token out of the `Authorization: Bearer …` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("missing authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("invalid authorization header format"))
}

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(AuthClaims(claims.clone()));
        }

        let token = bearer_token(&parts.headers)?;
        let claims = state.jwt_decoder.decode(token)?;
        Ok(AuthClaims(claims))
    }
}
