//! Login handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use coreadmin_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, TokenData};
use crate::state::AppState;

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let token = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        status: 200,
        data: TokenData { token },
    }))
}
