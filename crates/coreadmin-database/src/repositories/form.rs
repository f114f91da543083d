//! Form repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use coreadmin_core::error::{AppError, ErrorKind};
use coreadmin_core::result::AppResult;
use coreadmin_core::types::{FormId, PageRequest, PageResponse};
use coreadmin_entity::form::{Form, FormRecord};
use coreadmin_entity::store::FormStore;

/// Repository for form CRUD operations.
#[derive(Debug, Clone)]
pub struct FormRepository {
    pool: PgPool,
}

impl FormRepository {
    /// Create a new form repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FormStore for FormRepository {
    async fn create(&self, record: &FormRecord) -> AppResult<Form> {
        sqlx::query_as::<_, Form>(
            "INSERT INTO forms (title, icon, link, color, order_index, setting, \
                                public_to_intranet, menu_tree_id, path_api) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&record.title)
        .bind(&record.icon)
        .bind(&record.link)
        .bind(&record.color)
        .bind(record.order_index)
        .bind(record.setting)
        .bind(record.public_to_intranet)
        .bind(record.menu_tree_id)
        .bind(&record.path_api)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create form", e))
    }

    async fn update(&self, id: FormId, record: &FormRecord) -> AppResult<Form> {
        sqlx::query_as::<_, Form>(
            "UPDATE forms SET title = $2, icon = $3, link = $4, color = $5, order_index = $6, \
                              setting = $7, public_to_intranet = $8, menu_tree_id = $9, \
                              path_api = $10, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.icon)
        .bind(&record.link)
        .bind(&record.color)
        .bind(record.order_index)
        .bind(record.setting)
        .bind(record.public_to_intranet)
        .bind(record.menu_tree_id)
        .bind(&record.path_api)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update form", e))?
        .ok_or_else(|| AppError::not_found(format!("Form {id} not found")))
    }

    async fn list(&self) -> AppResult<Vec<Form>> {
        sqlx::query_as::<_, Form>(
            "SELECT * FROM forms WHERE deleted_at IS NULL ORDER BY order_index, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list forms", e))
    }

    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<Form>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forms WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count forms", e))?;

        let forms = sqlx::query_as::<_, Form>(
            "SELECT * FROM forms WHERE deleted_at IS NULL \
             ORDER BY order_index, id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list forms", e))?;

        Ok(PageResponse::new(forms, total as u64))
    }

    async fn delete(&self, id: FormId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE forms SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete form", e))?;

        Ok(result.rows_affected() > 0)
    }
}
