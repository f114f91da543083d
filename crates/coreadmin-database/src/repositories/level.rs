//! Level repository implementation.
//!
//! The deep read (level plus privilege edges plus their forms) is what the
//! authorization engine consumes on every request, so it stays free of any
//! caching: privilege edits are visible on the very next request.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use coreadmin_core::error::{AppError, ErrorKind};
use coreadmin_core::result::AppResult;
use coreadmin_core::types::{FormId, LevelId, MenuTreeId, PageRequest, PageResponse, PrivilegeId};
use coreadmin_entity::form::{Form, PathApi};
use coreadmin_entity::level::{FormGrant, Level, LevelDetail, LevelRecord};
use coreadmin_entity::store::LevelStore;

/// Repository for level CRUD and the privilege deep read.
#[derive(Debug, Clone)]
pub struct LevelRepository {
    pool: PgPool,
}

/// Flat row of one privilege edge joined with its form.
#[derive(Debug, FromRow)]
struct GrantRow {
    privilege_id: PrivilegeId,
    read: bool,
    write: bool,
    form_id: FormId,
    title: String,
    icon: String,
    link: String,
    color: String,
    order_index: i32,
    setting: bool,
    public_to_intranet: bool,
    menu_tree_id: Option<MenuTreeId>,
    path_api: PathApi,
    form_created_at: DateTime<Utc>,
    form_updated_at: DateTime<Utc>,
}

impl From<GrantRow> for FormGrant {
    fn from(row: GrantRow) -> Self {
        FormGrant {
            privilege_id: row.privilege_id,
            form: Form {
                id: row.form_id,
                title: row.title,
                icon: row.icon,
                link: row.link,
                color: row.color,
                order_index: row.order_index,
                setting: row.setting,
                public_to_intranet: row.public_to_intranet,
                menu_tree_id: row.menu_tree_id,
                path_api: row.path_api,
                created_at: row.form_created_at,
                updated_at: row.form_updated_at,
                deleted_at: None,
            },
            read: row.read,
            write: row.write,
        }
    }
}

impl LevelRepository {
    /// Create a new level repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load all live privilege edges of a level, joined with their forms.
    async fn load_grants(&self, level_id: LevelId) -> AppResult<Vec<FormGrant>> {
        let rows = sqlx::query_as::<_, GrantRow>(
            "SELECT lp.id AS privilege_id, lp.read, lp.write, \
                    f.id AS form_id, f.title, f.icon, f.link, f.color, f.order_index, \
                    f.setting, f.public_to_intranet, f.menu_tree_id, f.path_api, \
                    f.created_at AS form_created_at, f.updated_at AS form_updated_at \
             FROM level_privileges lp \
             JOIN forms f ON f.id = lp.form_id AND f.deleted_at IS NULL \
             WHERE lp.level_id = $1 AND lp.deleted_at IS NULL \
             ORDER BY lp.id",
        )
        .bind(level_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load level privileges", e)
        })?;

        Ok(rows.into_iter().map(FormGrant::from).collect())
    }
}

#[async_trait]
impl LevelStore for LevelRepository {
    async fn create(&self, record: &LevelRecord) -> AppResult<Level> {
        sqlx::query_as::<_, Level>(
            "INSERT INTO levels (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&record.name)
        .bind(&record.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("levels_name_key")
                    || db_err.constraint() == Some("levels_description_key") =>
            {
                AppError::conflict(format!("Level '{}' already exists", record.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create level", e),
        })
    }

    async fn update(&self, id: LevelId, record: &LevelRecord) -> AppResult<Level> {
        sqlx::query_as::<_, Level>(
            "UPDATE levels SET name = $2, description = $3, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update level", e))?
        .ok_or_else(|| AppError::not_found(format!("Level {id} not found")))
    }

    async fn find_detail(&self, id: LevelId) -> AppResult<Option<LevelDetail>> {
        let level = sqlx::query_as::<_, Level>(
            "SELECT * FROM levels WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find level", e))?;

        let Some(level) = level else {
            return Ok(None);
        };

        let privileges = self.load_grants(level.id).await?;
        Ok(Some(LevelDetail { level, privileges }))
    }

    async fn list(&self) -> AppResult<Vec<Level>> {
        sqlx::query_as::<_, Level>("SELECT * FROM levels WHERE deleted_at IS NULL ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list levels", e))
    }

    async fn paginate_detail(&self, page: &PageRequest) -> AppResult<PageResponse<LevelDetail>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM levels WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count levels", e))?;

        let levels = sqlx::query_as::<_, Level>(
            "SELECT * FROM levels WHERE deleted_at IS NULL ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list levels", e))?;

        let mut items = Vec::with_capacity(levels.len());
        for level in levels {
            let privileges = self.load_grants(level.id).await?;
            items.push(LevelDetail { level, privileges });
        }

        Ok(PageResponse::new(items, total as u64))
    }

    async fn delete(&self, id: LevelId) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // The level owns its edges: mark them first so no orphan grants
        // survive the level itself.
        sqlx::query(
            "UPDATE level_privileges SET deleted_at = NOW(), updated_at = NOW() \
             WHERE level_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete level privileges", e)
        })?;

        let result = sqlx::query(
            "UPDATE levels SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete level", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
