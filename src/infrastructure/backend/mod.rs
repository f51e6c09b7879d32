//! HTTP clients for the Defense Drill REST backend.
//!
//! Every client shares one [`BackendHttp`] (a pooled `reqwest::Client` plus a
//! base address) and turns raw replies into
//! [`crate::domain::BackendResponse`] values through a [`Reconciler`].

mod category_client;
mod drill_client;
mod http;
mod reconcile;
mod user_client;

pub use category_client::HttpCategoryClient;
pub use drill_client::HttpDrillClient;
pub use http::{BackendHttp, RawResponse, build_http_client};
pub use reconcile::Reconciler;
pub use user_client::HttpUserClient;
