//! User account fragments.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::BackendResponse;
use crate::domain::entities::User;
use crate::state::AppState;
use crate::web::form::FormFields;
use crate::web::fragments::{ConfirmDelete, ViewWindowList};
use crate::web::view_models::{ListMode, Notice, RoleChoice, USERS, role_choices};
use crate::web::{HtmxResult, render};

#[derive(Debug, Template)]
#[template(path = "fragments/user_view_one.html")]
pub struct UserDetails {
    pub notice: Notice,
    pub back_endpoint: String,
    pub user: User,
}

/// Create or modify form. The password field always starts empty.
#[derive(Debug, Template)]
#[template(path = "fragments/user_form.html")]
pub struct UserFormView {
    pub notice: Notice,
    pub window_title: String,
    pub post_endpoint: String,
    pub button_text: String,
    pub username_text: String,
    pub roles: Vec<RoleChoice>,
}

impl UserFormView {
    fn create(username: &str, roles: &[String], notice: Notice) -> Self {
        Self {
            notice,
            window_title: "Create New User".to_string(),
            post_endpoint: USERS.route("create"),
            button_text: "Create".to_string(),
            username_text: username.to_string(),
            roles: role_choices(roles),
        }
    }

    fn modify(id: i64, username: &str, roles: &[String], notice: Notice) -> Self {
        Self {
            notice,
            window_title: format!("Modify User: {id}"),
            post_endpoint: USERS.item_route("modify", id),
            button_text: "Update".to_string(),
            username_text: username.to_string(),
            roles: role_choices(roles),
        }
    }
}

async fn user_list(state: &AppState, mode: ListMode, notice: Notice) -> HtmxResult {
    let response = state.user_service.list().await?;
    render(&ViewWindowList::from_response(
        &USERS, mode, &response, notice,
    ))
}

fn details(user: &User, back_action: &str, notice: Notice) -> HtmxResult {
    render(&UserDetails {
        notice,
        back_endpoint: USERS.route(back_action),
        user: user.clone(),
    })
}

async fn lookup_failed<T>(state: &AppState, mode: ListMode, response: &BackendResponse<T>) -> HtmxResult {
    let notice = response.error().map(Notice::failed).unwrap_or_default();
    user_list(state, mode, notice).await
}

/// Removes an element by swapping in nothing.
///
/// # Endpoint
///
/// `GET /htmx/user/empty_htmx`
pub async fn empty_htmx() -> &'static str {
    ""
}

pub async fn view_all(State(state): State<AppState>) -> HtmxResult {
    user_list(&state, ListMode::View, Notice::default()).await
}

pub async fn view_one(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.user_service.get(id).await?;

    match response.payload() {
        Some(user) => details(user, "view", Notice::default()),
        None => lookup_failed(&state, ListMode::View, &response).await,
    }
}

pub async fn create_form() -> HtmxResult {
    render(&UserFormView::create("", &[], Notice::default()))
}

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /htmx/user/create`
///
/// # Form Fields
///
/// - `username`, `password` - Credentials of the new account
/// - `roles` - Granted roles, repeated once per checked role
pub async fn create(State(state): State<AppState>, fields: FormFields) -> HtmxResult {
    let form = fields.user_form();
    let username = form.username.clone();
    let roles = form.roles.clone();

    let response = state.user_service.create(form).await?;

    match (response.payload(), response.error()) {
        (Some(user), _) => details(user, "create", Notice::success("User Created Successfully!")),
        (None, error) => {
            let notice = error.map(Notice::failed).unwrap_or_default();
            render(&UserFormView::create(&username, &roles, notice))
        }
    }
}

pub async fn modify_list(State(state): State<AppState>) -> HtmxResult {
    user_list(&state, ListMode::Modify, Notice::default()).await
}

pub async fn modify_form(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.user_service.get(id).await?;

    match response.payload() {
        Some(user) => render(&UserFormView::modify(
            id,
            &user.username,
            &user.roles,
            Notice::default(),
        )),
        None => lookup_failed(&state, ListMode::Modify, &response).await,
    }
}

/// Replaces a user's name, password and roles.
///
/// # Endpoint
///
/// `POST /htmx/user/modify/{id}`
///
/// Validation failures show the form again; any other failure falls back to
/// the modify list.
pub async fn modify(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    fields: FormFields,
) -> HtmxResult {
    let form = fields.user_form();
    let username = form.username.clone();
    let roles = form.roles.clone();

    let response = state.user_service.update(id, form).await?;

    match (response.payload(), response.error()) {
        (Some(user), _) => details(user, "modify", Notice::success("User Modified Successfully!")),
        (None, Some(error)) if response.status() == StatusCode::BAD_REQUEST => render(
            &UserFormView::modify(id, &username, &roles, Notice::failed(error)),
        ),
        (None, _) => lookup_failed(&state, ListMode::Modify, &response).await,
    }
}

pub async fn delete_list(State(state): State<AppState>) -> HtmxResult {
    user_list(&state, ListMode::Delete, Notice::default()).await
}

pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.user_service.get(id).await?;

    match response.payload() {
        Some(user) => render(&ConfirmDelete {
            window_title: "Confirm User Deletion:".to_string(),
            id: id.to_string(),
            name: user.username.clone(),
            cancel_endpoint: USERS.route("delete"),
            confirm_endpoint: USERS.item_route("delete", id),
        }),
        None => lookup_failed(&state, ListMode::Delete, &response).await,
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.user_service.delete(id).await?;
    let notice = Notice::outcome(&response, "User Successfully Deleted!");
    user_list(&state, ListMode::Delete, notice).await
}
