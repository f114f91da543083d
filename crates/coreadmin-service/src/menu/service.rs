//! Expandable menu use cases.

use std::sync::Arc;

use coreadmin_core::result::AppResult;
use coreadmin_core::types::{MenuTreeId, PageRequest, PageResponse};
use coreadmin_entity::menu::{MenuTree, MenuTreeRecord};
use coreadmin_entity::store::MenuTreeStore;

/// Menu tree management.
#[derive(Clone)]
pub struct MenuTreeService {
    menus: Arc<dyn MenuTreeStore>,
}

impl MenuTreeService {
    /// Create a new menu service.
    pub fn new(menus: Arc<dyn MenuTreeStore>) -> Self {
        Self { menus }
    }

    /// Create a new menu node or update an existing one.
    pub async fn create_or_update(
        &self,
        id: Option<MenuTreeId>,
        record: MenuTreeRecord,
    ) -> AppResult<MenuTree> {
        match id {
            Some(id) => self.menus.update(id, &record).await,
            None => self.menus.create(&record).await,
        }
    }

    /// All live menu nodes in display order.
    pub async fn list(&self) -> AppResult<Vec<MenuTree>> {
        self.menus.list().await
    }

    /// One page of menu nodes plus the total count.
    pub async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<MenuTree>> {
        self.menus.paginate(page).await
    }

    /// Soft-delete a menu node.
    pub async fn delete(&self, id: MenuTreeId) -> AppResult<bool> {
        self.menus.delete(id).await
    }
}
