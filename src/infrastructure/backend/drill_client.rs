//! reqwest implementation of [`DrillClient`].

use async_trait::async_trait;
use reqwest::{Method, StatusCode};

use super::http::BackendHttp;
use super::reconcile::Reconciler;
use crate::domain::BackendResponse;
use crate::domain::clients::DrillClient;
use crate::domain::entities::{CategoryKind, Drill, DrillUpdate, Instructions, NewDrill};
use crate::error::AppError;

const RESOURCE: &str = "drill";
const HOW_TO: &str = "how-to";

/// Drill client talking to `{REST_API_URL}/drill`.
#[derive(Debug, Clone)]
pub struct HttpDrillClient {
    http: BackendHttp,
}

impl HttpDrillClient {
    pub fn new(http: BackendHttp) -> Self {
        Self { http }
    }

    fn by_id(&self, id: i64, rest: &[&str]) -> Result<url::Url, AppError> {
        let id = id.to_string();
        let mut segments = vec![RESOURCE, "id", id.as_str()];
        segments.extend_from_slice(rest);
        self.http.endpoint(&segments)
    }
}

#[async_trait]
impl DrillClient for HttpDrillClient {
    async fn list(&self) -> Result<BackendResponse<Vec<Drill>>, AppError> {
        let raw = self.http.get(self.http.endpoint(&[RESOURCE])?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .or_empty(Vec::new())
            .reconcile(raw.status, &raw.body))
    }

    async fn get(&self, id: i64) -> Result<BackendResponse<Drill>, AppError> {
        let raw = self.http.get(self.by_id(id, &[])?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(format!("Drill {id}"))
            .reconcile(raw.status, &raw.body))
    }

    async fn get_by_name(&self, name: &str) -> Result<BackendResponse<Drill>, AppError> {
        let url = self.http.endpoint(&[RESOURCE, "name", name])?;
        let raw = self.http.get(url).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(format!("Drill \"{name}\""))
            .reconcile(raw.status, &raw.body))
    }

    async fn create(&self, drill: &NewDrill) -> Result<BackendResponse<Drill>, AppError> {
        let url = self.http.endpoint(&[RESOURCE])?;
        let raw = self.http.send(Method::POST, url, Some(drill)).await?;

        Ok(Reconciler::expect(StatusCode::CREATED)
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn update(
        &self,
        id: i64,
        drill: &DrillUpdate,
    ) -> Result<BackendResponse<Drill>, AppError> {
        let raw = self
            .http
            .send(Method::PUT, self.by_id(id, &[])?, Some(drill))
            .await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(format!("Drill {id}"))
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn delete(&self, id: i64) -> Result<BackendResponse<String>, AppError> {
        let raw = self.http.delete(self.by_id(id, &[])?).await?;

        Ok(Reconciler::expect(StatusCode::NO_CONTENT)
            .or_empty("Drill Successfully Deleted!".to_string())
            .not_found(format!("Drill {id}"))
            .reconcile(raw.status, &raw.body))
    }

    async fn assign(
        &self,
        kind: CategoryKind,
        category_id: i64,
        drill_ids: &[i64],
    ) -> Result<BackendResponse<String>, AppError> {
        let action = format!("add_{}", kind.slug());
        let category = category_id.to_string();
        let url = self.http.endpoint(&[RESOURCE, &action, &category])?;
        let raw = self.http.send(Method::PATCH, url, Some(drill_ids)).await?;

        Ok(Reconciler::expect(StatusCode::NO_CONTENT)
            .or_empty(format!("Successfully added {kind} to Drills."))
            .not_found(format!("{kind} {category_id}"))
            .with_validation()
            .reconcile(raw.status, &raw.body))
    }

    async fn list_instructions(
        &self,
        drill_id: i64,
    ) -> Result<BackendResponse<Vec<String>>, AppError> {
        let raw = self.http.get(self.by_id(drill_id, &[HOW_TO])?).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .or_empty(Vec::new())
            .not_found(format!("Drill {drill_id}"))
            .reconcile(raw.status, &raw.body))
    }

    async fn instructions_details(
        &self,
        drill_id: i64,
        number: i64,
    ) -> Result<BackendResponse<Instructions>, AppError> {
        let number_segment = number.to_string();
        let url = self.by_id(drill_id, &[HOW_TO, &number_segment])?;
        let raw = self.http.get(url).await?;

        Ok(Reconciler::expect(StatusCode::OK)
            .not_found(format!("Instructions {number} for Drill {drill_id}"))
            .reconcile(raw.status, &raw.body))
    }
}
