//! Category and sub-category service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::BackendResponse;
use crate::domain::clients::CategoryClient;
use crate::domain::entities::{AbstractCategory, CategoryDraft};
use crate::error::AppError;

/// Service for one category hierarchy.
///
/// Two instances exist at runtime, one per
/// [`crate::domain::entities::CategoryKind`]. Drafts are validated locally
/// before anything is sent to the backend.
pub struct CategoryService {
    client: Arc<dyn CategoryClient>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(client: Arc<dyn CategoryClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<BackendResponse<Vec<AbstractCategory>>, AppError> {
        self.client.list().await
    }

    pub async fn get(&self, id: i64) -> Result<BackendResponse<AbstractCategory>, AppError> {
        self.client.get(id).await
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] if the backend cannot be reached. An
    /// invalid draft yields a `400` response without a backend call.
    pub async fn create(
        &self,
        draft: &CategoryDraft,
    ) -> Result<BackendResponse<AbstractCategory>, AppError> {
        if let Err(e) = draft.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.client.create(draft).await
    }

    /// Replaces a category's name and description.
    pub async fn update(
        &self,
        id: i64,
        draft: CategoryDraft,
    ) -> Result<BackendResponse<AbstractCategory>, AppError> {
        if let Err(e) = draft.validate() {
            return Ok(BackendResponse::invalid(e));
        }

        self.client.update(&draft.with_id(id)).await
    }

    pub async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError> {
        self.client.delete(id).await
    }
}
