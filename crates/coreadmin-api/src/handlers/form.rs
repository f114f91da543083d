//! Form handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use coreadmin_core::error::AppError;
use coreadmin_core::types::{FormId, PageResponse};
use coreadmin_entity::form::Form;

use crate::dto::request::{DeletePayload, FormPayload, RowsQuery};
use crate::dto::response::DeleteResponse;
use crate::handlers::page_request;
use crate::state::AppState;

/// GET /forms
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Form>>, AppError> {
    Ok(Json(state.form_service.list().await?))
}

/// GET /forms/{page}?rows=N
pub async fn paginate(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(rows): Query<RowsQuery>,
) -> Result<Json<PageResponse<Form>>, AppError> {
    let page = page_request(&page, &rows)?;
    Ok(Json(state.form_service.paginate(&page).await?))
}

/// POST /form: create or update a form.
pub async fn create_or_update(
    State(state): State<AppState>,
    Json(payload): Json<FormPayload>,
) -> Result<(StatusCode, Json<Form>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let id = payload.target_id();
    let form = state
        .form_service
        .create_or_update(id, payload.into_record())
        .await?;
    Ok((StatusCode::CREATED, Json(form)))
}

/// POST /form/delete: soft-delete a form.
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeletePayload>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.form_service.delete(FormId(payload.id)).await?;
    Ok(Json(DeleteResponse { deleted }))
}
