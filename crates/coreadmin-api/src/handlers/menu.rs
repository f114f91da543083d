//! Expandable menu handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use coreadmin_core::error::AppError;
use coreadmin_core::types::{MenuTreeId, PageResponse};
use coreadmin_entity::menu::MenuTree;

use crate::dto::request::{DeletePayload, MenuTreePayload, RowsQuery};
use crate::dto::response::DeleteResponse;
use crate::handlers::page_request;
use crate::state::AppState;

/// GET /expanses-menus
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuTree>>, AppError> {
    Ok(Json(state.menu_service.list().await?))
}

/// GET /expanses-menus/{page}?rows=N
pub async fn paginate(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(rows): Query<RowsQuery>,
) -> Result<Json<PageResponse<MenuTree>>, AppError> {
    let page = page_request(&page, &rows)?;
    Ok(Json(state.menu_service.paginate(&page).await?))
}

/// POST /expanses-menus: create or update a menu node.
pub async fn create_or_update(
    State(state): State<AppState>,
    Json(payload): Json<MenuTreePayload>,
) -> Result<(StatusCode, Json<MenuTree>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let id = payload.target_id();
    let menu = state
        .menu_service
        .create_or_update(id, payload.into_record())
        .await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

/// POST /expanses-menus/delete: soft-delete a menu node.
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.menu_service.delete(MenuTreeId(payload.id)).await?;
    Ok(Json(DeleteResponse { deleted }))
}
