//! Level use cases.

use std::sync::Arc;

use coreadmin_core::result::AppResult;
use coreadmin_core::types::{LevelId, PageRequest, PageResponse};
use coreadmin_entity::level::{Level, LevelDetail, LevelRecord};
use coreadmin_entity::store::LevelStore;

/// Level management.
#[derive(Clone)]
pub struct LevelService {
    levels: Arc<dyn LevelStore>,
}

impl LevelService {
    /// Create a new level service.
    pub fn new(levels: Arc<dyn LevelStore>) -> Self {
        Self { levels }
    }

    /// Create a new level or update an existing one.
    pub async fn create_or_update(
        &self,
        id: Option<LevelId>,
        record: LevelRecord,
    ) -> AppResult<Level> {
        match id {
            Some(id) => self.levels.update(id, &record).await,
            None => self.levels.create(&record).await,
        }
    }

    /// All live levels.
    pub async fn list(&self) -> AppResult<Vec<Level>> {
        self.levels.list().await
    }

    /// One page of deep-read levels plus the total count.
    pub async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<LevelDetail>> {
        self.levels.paginate_detail(page).await
    }

    /// Soft-delete a level together with its privilege edges.
    pub async fn delete(&self, id: LevelId) -> AppResult<bool> {
        self.levels.delete(id).await
    }
}
