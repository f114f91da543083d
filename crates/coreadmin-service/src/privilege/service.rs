//! Level-privilege use cases.

use std::sync::Arc;

use coreadmin_core::result::AppResult;
use coreadmin_core::types::PrivilegeId;
use coreadmin_entity::privilege::{LevelPrivilege, PrivilegeRecord};
use coreadmin_entity::store::PrivilegeStore;

/// Privilege edge management.
///
/// Creation is an upsert: posting the same `(level_id, form_id)` pair twice
/// updates the existing edge instead of duplicating it.
#[derive(Clone)]
pub struct PrivilegeService {
    privileges: Arc<dyn PrivilegeStore>,
}

impl PrivilegeService {
    /// Create a new privilege service.
    pub fn new(privileges: Arc<dyn PrivilegeStore>) -> Self {
        Self { privileges }
    }

    /// Create or update the edge for the record's `(level_id, form_id)`.
    pub async fn upsert(&self, record: PrivilegeRecord) -> AppResult<LevelPrivilege> {
        self.privileges.upsert(&record).await
    }

    /// All live privilege edges.
    pub async fn list(&self) -> AppResult<Vec<LevelPrivilege>> {
        self.privileges.list().await
    }

    /// Soft-delete a privilege edge.
    pub async fn delete(&self, id: PrivilegeId) -> AppResult<bool> {
        self.privileges.delete(id).await
    }
}
