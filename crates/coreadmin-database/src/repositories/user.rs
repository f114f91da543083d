//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use coreadmin_core::error::{AppError, ErrorKind};
use coreadmin_core::result::AppResult;
use coreadmin_core::types::{PageRequest, PageResponse, UserId};
use coreadmin_entity::store::UserStore;
use coreadmin_entity::user::{User, UserRecord};

/// Repository for user CRUD and credential queries.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, record: &UserRecord) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, full_name, password_hash, picture, level_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.full_name)
        .bind(&record.password_hash)
        .bind(&record.picture)
        .bind(record.level_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", record.username))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn update(&self, id: UserId, record: &UserRecord) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = $2, email = $3, full_name = $4, password_hash = $5, \
                              picture = $6, level_id = $7, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.full_name)
        .bind(&record.password_hash)
        .bind(&record.picture)
        .bind(record.level_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(email) = LOWER($1) AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by email", e))
    }

    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE deleted_at IS NULL \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(users, total as u64))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_failed_login(&self, id: UserId) -> AppResult<i32> {
        let row: (i32,) = sqlx::query_as(
            "UPDATE users SET failed_logins = failed_logins + 1, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING failed_logins",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record failed login", e)
        })?;

        Ok(row.0)
    }

    async fn clear_failed_logins(&self, id: UserId) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET failed_logins = 0, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to clear failed logins", e)
        })?;
        Ok(())
    }
}
