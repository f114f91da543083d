//! Form use cases.

use std::sync::Arc;

use coreadmin_core::result::AppResult;
use coreadmin_core::types::{FormId, PageRequest, PageResponse};
use coreadmin_entity::form::{Form, FormRecord};
use coreadmin_entity::store::FormStore;

/// Form management.
#[derive(Clone)]
pub struct FormService {
    forms: Arc<dyn FormStore>,
}

impl FormService {
    /// Create a new form service.
    pub fn new(forms: Arc<dyn FormStore>) -> Self {
        Self { forms }
    }

    /// Create a new form or update an existing one.
    pub async fn create_or_update(&self, id: Option<FormId>, record: FormRecord) -> AppResult<Form> {
        match id {
            Some(id) => self.forms.update(id, &record).await,
            None => self.forms.create(&record).await,
        }
    }

    /// All live forms in menu order.
    pub async fn list(&self) -> AppResult<Vec<Form>> {
        self.forms.list().await
    }

    /// One page of forms plus the total count.
    pub async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<Form>> {
        self.forms.paginate(page).await
    }

    /// Soft-delete a form.
    pub async fn delete(&self, id: FormId) -> AppResult<bool> {
        self.forms.delete(id).await
    }
}
