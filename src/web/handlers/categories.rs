//! Category and sub-category fragments.
//!
//! Both hierarchies share these handlers; the [`CategoryPages`] type
//! parameter picks the hierarchy when routes are registered, e.g.
//! `get(view_all::<Categories>)`.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::BackendResponse;
use crate::domain::entities::{AbstractCategory, CategoryDraft, CategoryKind};
use crate::state::AppState;
use crate::web::form::FormFields;
use crate::web::fragments::{ConfirmDelete, ViewWindowList};
use crate::web::view_models::{Choice, ListMode, Notice, Resource, choices_from};
use crate::web::{HtmxResult, render};

/// Selects which category hierarchy a handler serves.
pub trait CategoryPages: Send + Sync + 'static {
    const KIND: CategoryKind;

    fn resource() -> Resource {
        Resource::categories(Self::KIND)
    }
}

pub struct Categories;

impl CategoryPages for Categories {
    const KIND: CategoryKind = CategoryKind::Category;
}

pub struct SubCategories;

impl CategoryPages for SubCategories {
    const KIND: CategoryKind = CategoryKind::SubCategory;
}

#[derive(Debug, Template)]
#[template(path = "fragments/abstract_category_view_one.html")]
pub struct CategoryDetails {
    pub notice: Notice,
    pub label: String,
    pub back_endpoint: String,
    pub category: AbstractCategory,
}

#[derive(Debug, Template)]
#[template(path = "fragments/abstract_category_form.html")]
pub struct CategoryFormView {
    pub notice: Notice,
    pub window_title: String,
    pub post_endpoint: String,
    pub button_text: String,
    pub name_text: String,
    pub description_text: String,
    /// Drills to tag with a new category. Empty when modifying.
    pub drills: Vec<Choice>,
}

async fn category_list<K: CategoryPages>(
    state: &AppState,
    mode: ListMode,
    notice: Notice,
) -> HtmxResult {
    let response = state.categories(K::KIND).list().await?;
    render(&ViewWindowList::from_response(
        &K::resource(),
        mode,
        &response,
        notice,
    ))
}

fn details<K: CategoryPages>(category: &AbstractCategory, back_action: &str, notice: Notice) -> HtmxResult {
    render(&CategoryDetails {
        notice,
        label: K::KIND.label().to_string(),
        back_endpoint: K::resource().route(back_action),
        category: category.clone(),
    })
}

/// Falls back to the `mode` list with the lookup error in the banner.
async fn lookup_failed<K: CategoryPages, T>(
    state: &AppState,
    mode: ListMode,
    response: &BackendResponse<T>,
) -> HtmxResult {
    let notice = response.error().map(Notice::failed).unwrap_or_default();
    category_list::<K>(state, mode, notice).await
}

async fn create_form_with<K: CategoryPages>(
    state: &AppState,
    draft: &CategoryDraft,
    checked: &[i64],
    mut notice: Notice,
) -> HtmxResult {
    let drills = state.drill_service.list().await?;
    let drills = choices_from(&drills, checked, &mut notice);

    render(&CategoryFormView {
        notice,
        window_title: format!("Create New {}", K::KIND.label()),
        post_endpoint: K::resource().route("create"),
        button_text: "Create".to_string(),
        name_text: draft.name.clone(),
        description_text: draft.description.clone(),
        drills,
    })
}

fn modify_form_with<K: CategoryPages>(id: i64, draft: &CategoryDraft, notice: Notice) -> HtmxResult {
    render(&CategoryFormView {
        notice,
        window_title: format!("Modify {}: {id}", K::KIND.label()),
        post_endpoint: K::resource().item_route("modify", id),
        button_text: "Update".to_string(),
        name_text: draft.name.clone(),
        description_text: draft.description.clone(),
        drills: Vec::new(),
    })
}

pub async fn view_all<K: CategoryPages>(State(state): State<AppState>) -> HtmxResult {
    category_list::<K>(&state, ListMode::View, Notice::default()).await
}

pub async fn view_one<K: CategoryPages>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HtmxResult {
    let response = state.categories(K::KIND).get(id).await?;

    match response.payload() {
        Some(category) => details::<K>(category, "view", Notice::default()),
        None => lookup_failed::<K, _>(&state, ListMode::View, &response).await,
    }
}

pub async fn create_form<K: CategoryPages>(State(state): State<AppState>) -> HtmxResult {
    let empty = CategoryDraft {
        name: String::new(),
        description: String::new(),
    };
    create_form_with::<K>(&state, &empty, &[], Notice::default()).await
}

/// Creates a category and tags the checked drills with it.
///
/// # Endpoint
///
/// `POST /htmx/{category|sub_category}/create`
///
/// # Form Fields
///
/// - `name`, `description` - The new category
/// - `drill_ids` - Drills to tag, repeated once per checked drill
///
/// If tagging fails the category stays created and the banner shows both
/// the success and the tagging error.
pub async fn create<K: CategoryPages>(
    State(state): State<AppState>,
    fields: FormFields,
) -> HtmxResult {
    let draft = fields.category_draft();
    let drill_ids = fields.ids("drill_ids");
    let service = state.categories(K::KIND);

    let response = service.create(&draft).await?;
    let category = match (response.payload(), response.error()) {
        (Some(category), _) => category,
        (None, error) => {
            let notice = error.map(Notice::failed).unwrap_or_default();
            return create_form_with::<K>(&state, &draft, &drill_ids, notice).await;
        }
    };

    let mut notice = Notice::success(format!("{} Created Successfully!", K::KIND.label()));

    if !drill_ids.is_empty() {
        let assigned = state
            .drill_service
            .assign(K::KIND, category.id, &drill_ids)
            .await?;
        if let Some(error) = assigned.error() {
            notice.set_error(error);
        }
    }

    details::<K>(category, "create", notice)
}

pub async fn modify_list<K: CategoryPages>(State(state): State<AppState>) -> HtmxResult {
    category_list::<K>(&state, ListMode::Modify, Notice::default()).await
}

pub async fn modify_form<K: CategoryPages>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HtmxResult {
    let response = state.categories(K::KIND).get(id).await?;

    match response.payload() {
        Some(category) => {
            let draft = CategoryDraft {
                name: category.name.clone(),
                description: category.description.clone(),
            };
            modify_form_with::<K>(id, &draft, Notice::default())
        }
        None => lookup_failed::<K, _>(&state, ListMode::Modify, &response).await,
    }
}

/// Replaces a category's name and description.
///
/// # Endpoint
///
/// `POST /htmx/{category|sub_category}/modify/{id}`
///
/// Validation failures show the form again; any other failure falls back to
/// the modify list.
pub async fn modify<K: CategoryPages>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    fields: FormFields,
) -> HtmxResult {
    let draft = fields.category_draft();
    let response = state.categories(K::KIND).update(id, draft.clone()).await?;

    match (response.payload(), response.error()) {
        (Some(category), _) => details::<K>(
            category,
            "modify",
            Notice::success(format!("{} Modified Successfully!", K::KIND.label())),
        ),
        (None, Some(error)) if response.status() == StatusCode::BAD_REQUEST => {
            modify_form_with::<K>(id, &draft, Notice::failed(error))
        }
        (None, _) => lookup_failed::<K, _>(&state, ListMode::Modify, &response).await,
    }
}

pub async fn delete_list<K: CategoryPages>(State(state): State<AppState>) -> HtmxResult {
    category_list::<K>(&state, ListMode::Delete, Notice::default()).await
}

pub async fn confirm_delete<K: CategoryPages>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HtmxResult {
    let response = state.categories(K::KIND).get(id).await?;

    match response.payload() {
        Some(category) => render(&ConfirmDelete {
            window_title: format!("Confirm {} Deletion:", K::KIND.label()),
            id: id.to_string(),
            name: category.name.clone(),
            cancel_endpoint: K::resource().route("delete"),
            confirm_endpoint: K::resource().item_route("delete", id),
        }),
        None => lookup_failed::<K, _>(&state, ListMode::Delete, &response).await,
    }
}

pub async fn delete<K: CategoryPages>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HtmxResult {
    let response = state.categories(K::KIND).delete(id).await?;
    let notice = Notice::outcome(
        &response,
        &format!("{} Successfully Deleted!", K::KIND.label()),
    );
    category_list::<K>(&state, ListMode::Delete, notice).await
}
