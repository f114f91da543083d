//! Authorization middleware for the protected route group.
//!
//! Decodes the bearer token, asks the authorization engine for a decision,
//! and either forwards the request (with the claims stored as a typed
//! extension for the handlers) or terminates it with the 403 reason-code
//! payload. The underlying use case is never invoked on a denial.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use coreadmin_auth::authorize::AccessDecision;
use coreadmin_core::error::AppError;

use crate::extractors::auth::bearer_token;
use crate::state::AppState;

/// Gate one request through the authorization engine.
pub async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;
    let claims = state.jwt_decoder.decode(token)?;

    let decision = state
        .authorizer
        .authorize(&claims, request.method().as_str(), request.uri().path())
        .await;

    match decision {
        AccessDecision::Allowed => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        AccessDecision::Denied(reason) => Err(AppError::authorization(reason.message())),
    }
}
