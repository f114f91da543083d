//! Menu tree repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use coreadmin_core::error::{AppError, ErrorKind};
use coreadmin_core::result::AppResult;
use coreadmin_core::types::{MenuTreeId, PageRequest, PageResponse};
use coreadmin_entity::menu::{MenuTree, MenuTreeRecord};
use coreadmin_entity::store::MenuTreeStore;

/// Repository for expandable menu nodes.
#[derive(Debug, Clone)]
pub struct MenuTreeRepository {
    pool: PgPool,
}

impl MenuTreeRepository {
    /// Create a new menu tree repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuTreeStore for MenuTreeRepository {
    async fn create(&self, record: &MenuTreeRecord) -> AppResult<MenuTree> {
        sqlx::query_as::<_, MenuTree>(
            "INSERT INTO menu_trees (title, icon, color, order_index) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&record.title)
        .bind(&record.icon)
        .bind(&record.color)
        .bind(record.order_index)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu", e))
    }

    async fn update(&self, id: MenuTreeId, record: &MenuTreeRecord) -> AppResult<MenuTree> {
        sqlx::query_as::<_, MenuTree>(
            "UPDATE menu_trees SET title = $2, icon = $3, color = $4, order_index = $5, \
                                   updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.icon)
        .bind(&record.color)
        .bind(record.order_index)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu", e))?
        .ok_or_else(|| AppError::not_found(format!("Menu {id} not found")))
    }

    async fn list(&self) -> AppResult<Vec<MenuTree>> {
        sqlx::query_as::<_, MenuTree>(
            "SELECT * FROM menu_trees WHERE deleted_at IS NULL ORDER BY order_index, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))
    }

    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<MenuTree>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM menu_trees WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count menus", e)
                })?;

        let menus = sqlx::query_as::<_, MenuTree>(
            "SELECT * FROM menu_trees WHERE deleted_at IS NULL \
             ORDER BY order_index, id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))?;

        Ok(PageResponse::new(menus, total as u64))
    }

    async fn delete(&self, id: MenuTreeId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE menu_trees SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete menu", e))?;

        Ok(result.rows_affected() > 0)
    }
}
