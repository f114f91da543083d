//! User handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use coreadmin_core::error::AppError;
use coreadmin_core::types::{PageResponse, UserId};
use coreadmin_entity::user::User;

use crate::dto::request::{DeletePayload, RowsQuery, UserPayload};
use crate::dto::response::DeleteResponse;
use crate::extractors::AuthClaims;
use crate::handlers::page_request;
use crate::state::AppState;

/// GET /user: the authenticated caller's own record.
pub async fn current_user(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.get(claims.user_id()).await?;
    Ok(Json(user))
}

/// POST /user: create or update a user.
pub async fn create_or_update(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .create_or_update(payload.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /user/delete: soft-delete a user.
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.user_service.delete(UserId(payload.id)).await?;
    Ok(Json(DeleteResponse { deleted }))
}

/// GET /users/{page}?rows=N
pub async fn paginate(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(rows): Query<RowsQuery>,
) -> Result<Json<PageResponse<User>>, AppError> {
    let page = page_request(&page, &rows)?;
    let users = state.user_service.paginate(&page).await?;
    Ok(Json(users))
}
