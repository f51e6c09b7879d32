//! reqwest implementation of [`CategoryClient`], shared by both hierarchies.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use super::http::BackendHttp;
use super::reconcile::Reconciler;
use crate::domain::BackendResponse;
use crate::domain::clients::CategoryClient;
use crate::domain::entities::{AbstractCategory, CategoryDraft, CategoryKind};
use crate::error::AppError;

/// Category client talking to `{REST_API_URL}/category` or
/// `{REST_API_URL}/sub_category`, depending on its [`CategoryKind`].
#[derive(Debug, Clone)]
pub struct HttpCategoryClient {
    http: BackendHttp,
    kind: CategoryKind,
}

impl HttpCategoryClient {
    pub fn new(http: BackendHttp, kind: CategoryKind) -> Self {
        Self { http, kind }
    }

    fn by_id(&self, id: i64) -> Result<url::Url, AppError> {
        self.http
            .endpoint(&[self.kind.slug(), "id", &id.to_string()])
    }

    fn missing(&self, id: i64) -> String {
        format!("{} {id}", self.kind)
    }
}

#[async_trait]
impl CategoryClient for HttpCategoryClient {
    async fn list(&self) -> Result<BackendResponse<Vec<AbstractCategory>>, AppError> {
        let raw = self.http.get(self.http.endpoint(&[self.kind.slug()])?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .or_empty(Vec::new())
            .reconcile(raw.status, &raw.body))
    }

    async fn get(&self, id: i64) -> Result<BackendResponse<AbstractCategory>, AppError> {
        let raw = self.http.get(self.by_id(id)?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(self.missing(id))
            .reconcile(raw.status, &raw.body))
    }

    async fn create(
        &self,
        draft: &CategoryDraft,
    ) -> Result<BackendResponse<AbstractCategory>, AppError> {
        let url = self.http.endpoint(&[self.kind.slug()])?;
        let raw = self.http.send(Method::POST, url, Some(draft)).await?;

        Ok(Reconciler::expect(StatusCode::CREATED)
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn update(
        &self,
        category: &AbstractCategory,
    ) -> Result<BackendResponse<AbstractCategory>, AppError> {
        let url = self.by_id(category.id)?;
        let raw = self.http.send(Method::PUT, url, Some(category)).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(self.missing(category.id))
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError> {
        let raw = self.http.delete(self.by_id(id)?).await?;

        Ok(Reconciler::expect(StatusCode::NO_CONTENT)
            .or_empty(format!("{} Successfully Deleted!", self.kind))
            .not_found(self.missing(id))
            .reconcile(raw.status, &raw.body))
    }
}
