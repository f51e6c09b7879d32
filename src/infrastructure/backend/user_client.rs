//! reqwest implementation of [`UserClient`].

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use super::http::BackendHttp;
use super::reconcile::Reconciler;
use crate::domain::BackendResponse;
use crate::domain::clients::UserClient;
use crate::domain::entities::{User, UserForm};
use crate::error::AppError;

/// User client talking to `{SECURITY_API_URL}`.
///
/// Updates are sent as `POST /id/{id}`, which is what the security API expects.
#[derive(Debug, Clone)]
pub struct HttpUserClient {
    http: BackendHttp,
}

impl HttpUserClient {
    pub fn new(http: BackendHttp) -> Self {
        Self { http }
    }

    fn by_id(&self, id: i64) -> Result<url::Url, AppError> {
        self.http.endpoint(&["id", &id.to_string()])
    }
}

#[async_trait]
impl UserClient for HttpUserClient {
    async fn list(&self) -> Result<BackendResponse<Vec<User>>, AppError> {
        let raw = self.http.get(self.http.endpoint(&[])?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .or_empty(Vec::new())
            .reconcile(raw.status, &raw.body))
    }

    async fn get(&self, id: i64) -> Result<BackendResponse<User>, AppError> {
        let raw = self.http.get(self.by_id(id)?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(format!("User {id}"))
            .reconcile(raw.status, &raw.body))
    }

    async fn create(&self, user: &UserForm) -> Result<BackendResponse<User>, AppError> {
        let url = self.http.endpoint(&[])?;
        let raw = self.http.send(Method::POST, url, Some(user)).await?;

        Ok(Reconciler::expect(StatusCode::CREATED)
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn update(&self, id: i64, user: &UserForm) -> Result<BackendResponse<User>, AppError> {
        let raw = self
            .http
            .send(Method::POST, self.by_id(id)?, Some(user))
            .await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(format!("User {id}"))
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError> {
        let raw = self.http.delete(self.by_id(id)?).await?;

        Ok(Reconciler::expect(StatusCode::NO_CONTENT)
            .or_empty("User Successfully Deleted!".to_string())
            .not_found(format!("User {id}"))
            .reconcile(raw.status, &raw.body))
    }
}
