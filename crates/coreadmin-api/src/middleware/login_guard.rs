//! Login throttle middleware.
//!
//! Wraps only the login route: a locked-out client IP is rejected before
//! the credential check runs, a 401 outcome counts as a failure, and a
//! successful login clears the counter.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use coreadmin_core::error::AppError;

use crate::state::AppState;

/// Apply the failed-login lockout around the login handler.
pub async fn login_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client_ip = client_ip(request.headers());

    if !state.login_throttle.check(&client_ip).await {
        return Err(AppError::rate_limit(
            "too many failed attempts, try again later",
        ));
    }

    let response = next.run(request).await;

    if response.status() == StatusCode::UNAUTHORIZED {
        state.login_throttle.record_failure(&client_ip).await;
    } else if response.status().is_success() {
        state.login_throttle.record_success(&client_ip).await;
    }

    Ok(response)
}

/// Best-effort client IP: first `X-Forwarded-For` hop, else a fixed bucket.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
