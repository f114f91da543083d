//! First-startup seeding of the default administration data.
//!
//! Each group is only seeded when its table is empty, so reruns are no-ops.
//! The admin password arrives pre-hashed; hashing is the auth crate's job
//! and this crate never sees a plaintext secret.

use sqlx::PgPool;
use tracing::info;

use coreadmin_core::error::{AppError, ErrorKind};
use coreadmin_core::result::AppResult;

/// Seed forms, levels, privileges, and the initial admin user.
pub async fn seed(pool: &PgPool, admin_email: &str, admin_password_hash: &str) -> AppResult<()> {
    if table_is_empty(pool, "forms").await? {
        seed_forms(pool).await?;
        info!("Seeded default forms");
    }

    if table_is_empty(pool, "levels").await? {
        seed_levels(pool).await?;
        info!("Seeded default levels");
    }

    if table_is_empty(pool, "level_privileges").await? {
        seed_privileges(pool).await?;
        info!("Seeded default level privileges");
    }

    if table_is_empty(pool, "users").await? {
        seed_admin_user(pool, admin_email, admin_password_hash).await?;
        info!(email = admin_email, "Seeded administrator account");
    }

    Ok(())
}

async fn table_is_empty(pool: &PgPool, table: &str) -> AppResult<bool> {
    let count: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {table} WHERE deleted_at IS NULL"
    ))
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count seed table", e))?;
    Ok(count == 0)
}

async fn seed_forms(pool: &PgPool) -> AppResult<()> {
    let forms: &[(&str, &str, &str, &str, i32)] = &[
        (
            "Usuarios",
            "mdi-account-check-outline",
            "usuarios",
            "user|users",
            1,
        ),
        (
            "Identidades",
            "mdi-account-check-outline",
            "roles",
            "level|levels",
            2,
        ),
        (
            "Formularios",
            "mdi-account-check-outline",
            "formularios",
            "form|forms",
            3,
        ),
        (
            "Menú Expansibles",
            "mdi-file-tree-outline",
            "menu-expansible",
            "expanses-menu|expanses-menus",
            4,
        ),
        (
            "Privilegios",
            "mdi-shield-key-outline",
            "privilegios",
            "level-privilege|level-privileges",
            5,
        ),
    ];

    for (title, icon, link, path_api, order_index) in forms {
        sqlx::query(
            "INSERT INTO forms (title, icon, link, color, order_index, setting, path_api) \
             VALUES ($1, $2, $3, '', $4, TRUE, $5)",
        )
        .bind(title)
        .bind(icon)
        .bind(link)
        .bind(order_index)
        .bind(path_api)
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed form", e))?;
    }

    Ok(())
}

async fn seed_levels(pool: &PgPool) -> AppResult<()> {
    for (name, description) in [
        ("Administrador", "Acceso completo a la intranet"),
        ("Invitado", "Acceso de solo lectura"),
    ] {
        sqlx::query("INSERT INTO levels (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed level", e))?;
    }

    Ok(())
}

async fn seed_privileges(pool: &PgPool) -> AppResult<()> {
    // Administrator gets read+write on every seeded form.
    sqlx::query(
        "INSERT INTO level_privileges (level_id, form_id, read, write) \
         SELECT l.id, f.id, TRUE, TRUE FROM levels l CROSS JOIN forms f \
         WHERE l.name = 'Administrador' AND l.deleted_at IS NULL AND f.deleted_at IS NULL",
    )
    .execute(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to seed admin privileges", e)
    })?;

    // Guests may only read the user list.
    sqlx::query(
        "INSERT INTO level_privileges (level_id, form_id, read, write) \
         SELECT l.id, f.id, TRUE, FALSE FROM levels l JOIN forms f ON f.path_api = 'user|users' \
         WHERE l.name = 'Invitado' AND l.deleted_at IS NULL AND f.deleted_at IS NULL",
    )
    .execute(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to seed guest privileges", e)
    })?;

    Ok(())
}

async fn seed_admin_user(pool: &PgPool, email: &str, password_hash: &str) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO users (username, email, full_name, password_hash, level_id) \
         SELECT 'admin', $1, 'Administrador', $2, l.id \
         FROM levels l WHERE l.name = 'Administrador' AND l.deleted_at IS NULL",
    )
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed admin user", e))?;

    Ok(())
}
