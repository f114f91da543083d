//! Level handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use coreadmin_core::error::AppError;
use coreadmin_core::types::{LevelId, PageResponse};
use coreadmin_entity::level::{Level, LevelDetail};

use crate::dto::request::{DeletePayload, LevelPayload, RowsQuery};
use crate::dto::response::DeleteResponse;
use crate::handlers::page_request;
use crate::state::AppState;

/// GET /levels
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Level>>, AppError> {
    Ok(Json(state.level_service.list().await?))
}

/// GET /levels/{page}?rows=N
pub async fn paginate(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(rows): Query<RowsQuery>,
) -> Result<Json<PageResponse<LevelDetail>>, AppError> {
    let page = page_request(&page, &rows)?;
    Ok(Json(state.level_service.paginate(&page).await?))
}

/// POST /level: create or update a level.
pub async fn create_or_update(
    State(state): State<AppState>,
    Json(payload): Json<LevelPayload>,
) -> Result<(StatusCode, Json<Level>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let id = payload.target_id();
    let level = state
        .level_service
        .create_or_update(id, payload.into_record())
        .await?;
    Ok((StatusCode::CREATED, Json(level)))
}

/// POST /level/delete: soft-delete a level and its privilege edges.
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.level_service.delete(LevelId(payload.id)).await?;
    Ok(Json(DeleteResponse { deleted }))
}
