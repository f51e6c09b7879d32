//! Full-page handlers: home, the modify index and the tabbed editors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::CategoryKind;
use crate::state::AppState;
use crate::web::view_models::{DRILLS, ListItem, Resource, USERS};

/// Template for the landing page.
///
/// Renders `templates/home.html` with the server address and a link to the
/// backend's API documentation.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub server_address: String,
    pub api_docs_uri: String,
}

/// Template for the index of editable resources.
#[derive(Template, WebTemplate)]
#[template(path = "modify.html")]
pub struct ModifyTemplate {}

/// Template for a resource editor: a side-nav of fragment routes and a
/// window the fragments load into.
#[derive(Template, WebTemplate)]
#[template(path = "tab_with_window.html")]
pub struct TabWithWindowTemplate {
    pub tab_title: String,
    pub page_title: String,
    pub items: Vec<ListItem>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        server_address: state.site.server_address.clone(),
        api_docs_uri: state.site.api_docs_uri.clone(),
    }
}

/// # Endpoint
///
/// `GET /modify`
pub async fn modify_handler() -> impl IntoResponse {
    ModifyTemplate {}
}

/// Renders the editor for one resource.
///
/// # Endpoint
///
/// `GET /modify/{drill|category|sub_category|user}`
///
/// Any other resource name is `404 Not Found`.
pub async fn editor_handler(Path(resource): Path<String>) -> Response {
    match side_nav(&resource) {
        Some((title, items)) => TabWithWindowTemplate {
            tab_title: title.clone(),
            page_title: title,
            items,
        }
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Title and side-nav entries of the editor for `resource`.
fn side_nav(resource: &str) -> Option<(String, Vec<ListItem>)> {
    let (resource, labels) = match resource {
        "drill" => (
            DRILLS,
            ["View Drills", "Create Drills", "Modify Drills", "Delete Drills"],
        ),
        "category" => (
            Resource::categories(CategoryKind::Category),
            [
                "View Categories",
                "Create Category",
                "Modify Category",
                "Delete Category",
            ],
        ),
        "sub_category" => (
            Resource::categories(CategoryKind::SubCategory),
            [
                "View Sub-Categories",
                "Create Sub-Category",
                "Modify Sub-Category",
                "Delete Sub-Category",
            ],
        ),
        "user" => (
            USERS,
            ["View Users", "Create Users", "Modify Users", "Delete Users"],
        ),
        _ => return None,
    };

    let items = labels
        .into_iter()
        .zip(["view", "create", "modify", "delete"])
        .map(|(label, action)| ListItem::new(label, resource.route(action)))
        .collect();

    Some((format!("Modify {}", resource.noun), items))
}
