//! Persistence capability traits.
//!
//! Each entity is accessed through one of these interfaces with a single
//! sqlx-backed implementation in `coreadmin-database`. The trait boundary
//! exists so the authorization engine and the use-case services can be
//! exercised against in-memory fakes.

use async_trait::async_trait;

use coreadmin_core::result::AppResult;
use coreadmin_core::types::{
    FormId, LevelId, MenuTreeId, PageRequest, PageResponse, PrivilegeId, UserId,
};

use crate::form::{Form, FormRecord};
use crate::level::{Level, LevelDetail, LevelRecord};
use crate::menu::{MenuTree, MenuTreeRecord};
use crate::privilege::{LevelPrivilege, PrivilegeRecord};
use crate::user::{User, UserRecord};

/// Store for [`User`] records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored row.
    async fn create(&self, record: &UserRecord) -> AppResult<User>;

    /// Update an existing user and return the stored row.
    async fn update(&self, id: UserId, record: &UserRecord) -> AppResult<User>;

    /// Find a live user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a live user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List one page of users plus the total live count.
    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<User>>;

    /// Soft-delete a user. Returns `true` if a live row was marked.
    async fn delete(&self, id: UserId) -> AppResult<bool>;

    /// Increment the failed-login counter and return the new value.
    async fn record_failed_login(&self, id: UserId) -> AppResult<i32>;

    /// Reset the failed-login counter to zero.
    async fn clear_failed_logins(&self, id: UserId) -> AppResult<()>;
}

/// Store for [`Level`] records and their privilege edges.
#[async_trait]
pub trait LevelStore: Send + Sync {
    /// Insert a new level.
    async fn create(&self, record: &LevelRecord) -> AppResult<Level>;

    /// Update an existing level.
    async fn update(&self, id: LevelId, record: &LevelRecord) -> AppResult<Level>;

    /// Deep read: the level plus each privilege edge joined with its form.
    async fn find_detail(&self, id: LevelId) -> AppResult<Option<LevelDetail>>;

    /// List all live levels.
    async fn list(&self) -> AppResult<Vec<Level>>;

    /// One page of deep-read levels plus the total live count.
    async fn paginate_detail(&self, page: &PageRequest) -> AppResult<PageResponse<LevelDetail>>;

    /// Soft-delete a level AND all of its privilege edges. The cascade is
    /// explicit: a level owns its edges and must never leave orphans behind.
    async fn delete(&self, id: LevelId) -> AppResult<bool>;
}

/// Store for [`Form`] records.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Insert a new form.
    async fn create(&self, record: &FormRecord) -> AppResult<Form>;

    /// Update an existing form.
    async fn update(&self, id: FormId, record: &FormRecord) -> AppResult<Form>;

    /// List all live forms ordered by their ordering index.
    async fn list(&self) -> AppResult<Vec<Form>>;

    /// One page of forms plus the total live count.
    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<Form>>;

    /// Soft-delete a form. Returns `true` if a live row was marked.
    async fn delete(&self, id: FormId) -> AppResult<bool>;
}

/// Store for [`LevelPrivilege`] edges.
#[async_trait]
pub trait PrivilegeStore: Send + Sync {
    /// Create or update the edge for `(level_id, form_id)`.
    ///
    /// At most one live edge exists per pair; a second upsert for the same
    /// pair updates the flags of the existing edge instead of duplicating it.
    async fn upsert(&self, record: &PrivilegeRecord) -> AppResult<LevelPrivilege>;

    /// List all live edges.
    async fn list(&self) -> AppResult<Vec<LevelPrivilege>>;

    /// Soft-delete an edge. Returns `true` if a live row was marked.
    async fn delete(&self, id: PrivilegeId) -> AppResult<bool>;
}

/// Store for [`MenuTree`] records.
#[async_trait]
pub trait MenuTreeStore: Send + Sync {
    /// Insert a new menu node.
    async fn create(&self, record: &MenuTreeRecord) -> AppResult<MenuTree>;

    /// Update an existing menu node.
    async fn update(&self, id: MenuTreeId, record: &MenuTreeRecord) -> AppResult<MenuTree>;

    /// List all live menu nodes ordered by their ordering index.
    async fn list(&self) -> AppResult<Vec<MenuTree>>;

    /// One page of menu nodes plus the total live count.
    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<MenuTree>>;

    /// Soft-delete a menu node. Returns `true` if a live row was marked.
    async fn delete(&self, id: MenuTreeId) -> AppResult<bool>;
}
