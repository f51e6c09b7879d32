//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CategoryService, DrillService, UserService};
use crate::config::Config;
use crate::domain::entities::CategoryKind;
use crate::error::AppError;
use crate::infrastructure::backend::{
    BackendHttp, HttpCategoryClient, HttpDrillClient, HttpUserClient, build_http_client,
};

/// Values rendered on the home page.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub server_address: String,
    pub api_docs_uri: String,
}

#[derive(Clone)]
pub struct AppState {
    pub drill_service: Arc<DrillService>,
    pub category_service: Arc<CategoryService>,
    pub sub_category_service: Arc<CategoryService>,
    pub user_service: Arc<UserService>,
    pub site: Arc<SiteInfo>,
}

impl AppState {
    pub fn new(
        drill_service: Arc<DrillService>,
        category_service: Arc<CategoryService>,
        sub_category_service: Arc<CategoryService>,
        user_service: Arc<UserService>,
        site: SiteInfo,
    ) -> Self {
        Self {
            drill_service,
            category_service,
            sub_category_service,
            user_service,
            site: Arc::new(site),
        }
    }

    /// Wires reqwest-backed services for the backends named in `config`.
    ///
    /// All clients share one connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Endpoint`] if a backend URL cannot be used as a
    /// base address, or [`AppError::Backend`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = build_http_client(config.backend_timeout())?;
        let rest = BackendHttp::new(client.clone(), &config.rest_api_url)?;
        let security = BackendHttp::new(client, &config.security_api_url)?;

        Ok(Self::new(
            Arc::new(DrillService::new(Arc::new(HttpDrillClient::new(
                rest.clone(),
            )))),
            Arc::new(CategoryService::new(Arc::new(HttpCategoryClient::new(
                rest.clone(),
                CategoryKind::Category,
            )))),
            Arc::new(CategoryService::new(Arc::new(HttpCategoryClient::new(
                rest,
                CategoryKind::SubCategory,
            )))),
            Arc::new(UserService::new(Arc::new(HttpUserClient::new(security)))),
            SiteInfo {
                server_address: config.server_address.clone(),
                api_docs_uri: config.api_docs_uri(),
            },
        ))
    }

    /// Service for the given category hierarchy.
    pub fn categories(&self, kind: CategoryKind) -> &Arc<CategoryService> {
        match kind {
            CategoryKind::Category => &self.category_service,
            CategoryKind::SubCategory => &self.sub_category_service,
        }
    }
}
