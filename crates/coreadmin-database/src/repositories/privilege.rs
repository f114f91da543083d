//! Level-privilege repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use coreadmin_core::error::{AppError, ErrorKind};
use coreadmin_core::result::AppResult;
use coreadmin_core::types::PrivilegeId;
use coreadmin_entity::privilege::{LevelPrivilege, PrivilegeRecord};
use coreadmin_entity::store::PrivilegeStore;

/// Repository for level-privilege edges.
#[derive(Debug, Clone)]
pub struct PrivilegeRepository {
    pool: PgPool,
}

impl PrivilegeRepository {
    /// Create a new privilege repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrivilegeStore for PrivilegeRepository {
    async fn upsert(&self, record: &PrivilegeRecord) -> AppResult<LevelPrivilege> {
        sqlx::query_as::<_, LevelPrivilege>(
            "INSERT INTO level_privileges (level_id, form_id, read, write) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (level_id, form_id) WHERE deleted_at IS NULL \
             DO UPDATE SET read = EXCLUDED.read, write = EXCLUDED.write, updated_at = NOW() \
             RETURNING *",
        )
        .bind(record.level_id)
        .bind(record.form_id)
        .bind(record.read)
        .bind(record.write)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert privilege", e))
    }

    async fn list(&self) -> AppResult<Vec<LevelPrivilege>> {
        sqlx::query_as::<_, LevelPrivilege>(
            "SELECT * FROM level_privileges WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list privileges", e))
    }

    async fn delete(&self, id: PrivilegeId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE level_privileges SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete privilege", e))?;

        Ok(result.rows_affected() > 0)
    }
}
