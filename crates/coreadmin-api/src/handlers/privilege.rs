//! Level-privilege handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use coreadmin_core::error::AppError;
use coreadmin_core::types::PrivilegeId;
use coreadmin_entity::privilege::LevelPrivilege;

use crate::dto::request::{DeletePayload, PrivilegePayload};
use crate::dto::response::DeleteResponse;
use crate::state::AppState;

/// GET /level-privileges
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<LevelPrivilege>>, AppError> {
    Ok(Json(state.privilege_service.list().await?))
}

/// POST /level-privilege: upsert the edge for `(level_id, form_id)`.
pub async fn upsert(
    State(state): State<AppState>,
    Json(payload): Json<PrivilegePayload>,
) -> Result<(StatusCode, Json<LevelPrivilege>), AppError> {
    let privilege = state
        .privilege_service
        .upsert(payload.into_record())
        .await?;
    Ok((StatusCode::CREATED, Json(privilege)))
}

/// POST /level-privilege/delete: soft-delete an edge.
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .privilege_service
        .delete(PrivilegeId(payload.id))
        .await?;
    Ok(Json(DeleteResponse { deleted }))
}
