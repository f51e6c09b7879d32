//! Drill fragments, including the instruction editors.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::domain::BackendResponse;
use crate::domain::entities::{Drill, DrillForm};
use crate::state::AppState;
use crate::web::form::FormFields;
use crate::web::fragments::{ConfirmDelete, ViewWindowList};
use crate::web::view_models::{
    Choice, DRILLS, ListItem, ListMode, Notice, choices_from, encode_segment, with_query,
};
use crate::web::{HtmxResult, render};

/// Where the "Back" button of a drill's detail view leads.
#[derive(Debug, Deserialize)]
pub struct BackQuery {
    #[serde(rename = "backEndpoint")]
    back_endpoint: Option<String>,
}

/// List window an instruction edit started from, carried through every step.
#[derive(Debug, Deserialize)]
pub struct StartingQuery {
    #[serde(rename = "startingEndpoint")]
    starting_endpoint: Option<String>,
}

fn or_view_list(endpoint: Option<String>) -> String {
    endpoint
        .filter(|e| e.starts_with("/htmx/"))
        .unwrap_or_else(|| DRILLS.route("view"))
}

#[derive(Debug, Clone)]
pub struct InstructionsRow {
    pub description: String,
    pub steps: Vec<String>,
    pub video_id: Option<String>,
    pub modify_endpoint: String,
    pub delete_endpoint: String,
}

/// A drill flattened for the detail view.
#[derive(Debug, Clone)]
pub struct DrillSummary {
    pub id: i64,
    pub name: String,
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
    pub related_drills: Vec<ListItem>,
    pub instructions: Vec<InstructionsRow>,
    pub create_instructions_endpoint: String,
}

impl DrillSummary {
    fn new(drill: &Drill, back_endpoint: &str) -> Self {
        let instructions_route = |action: &str, description: &str| {
            with_query(
                &format!(
                    "/htmx/drill/{}/instructions/{action}/{}",
                    drill.id,
                    encode_segment(description)
                ),
                "startingEndpoint",
                back_endpoint,
            )
        };

        Self {
            id: drill.id,
            name: drill.name.clone(),
            categories: drill.categories.iter().map(|c| c.name.clone()).collect(),
            sub_categories: drill.sub_categories.iter().map(|c| c.name.clone()).collect(),
            related_drills: drill
                .related_drills
                .iter()
                .map(|related| {
                    ListItem::new(
                        related.name.clone(),
                        with_query(
                            &DRILLS.item_route("view", related.id),
                            "backEndpoint",
                            back_endpoint,
                        ),
                    )
                })
                .collect(),
            instructions: drill
                .instructions
                .iter()
                .map(|i| InstructionsRow {
                    description: i.description.clone(),
                    steps: i.steps.clone(),
                    video_id: i.video_id.clone(),
                    modify_endpoint: instructions_route("modify", &i.description),
                    delete_endpoint: instructions_route("confirm_delete", &i.description),
                })
                .collect(),
            create_instructions_endpoint: with_query(
                &format!("/htmx/drill/{}/instructions/create", drill.id),
                "startingEndpoint",
                back_endpoint,
            ),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "fragments/drill_view_one.html")]
pub struct DrillDetails {
    pub notice: Notice,
    pub back_endpoint: String,
    pub drill: Option<DrillSummary>,
}

#[derive(Debug, Template)]
#[template(path = "fragments/drill_form.html")]
pub struct DrillFormView {
    pub notice: Notice,
    pub window_title: String,
    pub post_endpoint: String,
    pub button_text: String,
    pub name_text: String,
    pub drills: Vec<Choice>,
    pub categories: Vec<Choice>,
    pub sub_categories: Vec<Choice>,
}

#[derive(Debug, Template)]
#[template(path = "fragments/instructions_form.html")]
pub struct InstructionsFormView {
    pub notice: Notice,
    pub window_title: String,
    pub post_endpoint: String,
    pub button_text: String,
    pub cancel_endpoint: String,
    pub description_text: String,
    pub video_id_text: String,
    pub first_step: String,
    pub other_steps: Vec<String>,
}

#[derive(Debug, Template)]
#[template(path = "fragments/instructions_add_step.html")]
pub struct InstructionsAddStep {}

/// Where a drill form posts to and which drill it edits.
struct FormTarget {
    window_title: &'static str,
    post_endpoint: String,
    button_text: &'static str,
    editing: Option<i64>,
}

impl FormTarget {
    fn create() -> Self {
        Self {
            window_title: "Create New Drill",
            post_endpoint: DRILLS.route("create"),
            button_text: "Create",
            editing: None,
        }
    }

    fn modify(id: i64) -> Self {
        Self {
            window_title: "Update Drill",
            post_endpoint: DRILLS.item_route("modify", id),
            button_text: "Update",
            editing: Some(id),
        }
    }
}

async fn drill_list(state: &AppState, mode: ListMode, notice: Notice) -> HtmxResult {
    let response = state.drill_service.list().await?;
    render(&ViewWindowList::from_response(
        &DRILLS, mode, &response, notice,
    ))
}

fn details(response: &BackendResponse<Drill>, back_endpoint: &str, mut notice: Notice) -> HtmxResult {
    if let Some(error) = response.error() {
        notice.set_error(error);
    }

    render(&DrillDetails {
        notice,
        back_endpoint: back_endpoint.to_string(),
        drill: response
            .payload()
            .map(|drill| DrillSummary::new(drill, back_endpoint)),
    })
}

async fn show_drill(state: &AppState, id: i64, back_endpoint: &str, notice: Notice) -> HtmxResult {
    let response = state.drill_service.get(id).await?;
    details(&response, back_endpoint, notice)
}

/// Renders the drill form with every drill, category and sub-category as a
/// checkbox. A drill is never offered as related to itself.
async fn drill_form(
    state: &AppState,
    target: FormTarget,
    values: &DrillForm,
    mut notice: Notice,
) -> HtmxResult {
    let drills = state.drill_service.list().await?;
    let categories = state.category_service.list().await?;
    let sub_categories = state.sub_category_service.list().await?;

    let mut drills = choices_from(&drills, &values.related_drill_ids, &mut notice);
    if let Some(id) = target.editing {
        drills.retain(|choice| choice.id != id);
    }
    let categories = choices_from(&categories, &values.category_ids, &mut notice);
    let sub_categories = choices_from(&sub_categories, &values.sub_category_ids, &mut notice);

    render(&DrillFormView {
        notice,
        window_title: target.window_title.to_string(),
        post_endpoint: target.post_endpoint,
        button_text: target.button_text.to_string(),
        name_text: values.name.clone(),
        drills,
        categories,
        sub_categories,
    })
}

/// Removes an element by swapping in nothing.
///
/// # Endpoint
///
/// `GET /htmx/drill/empty_htmx`
pub async fn empty_htmx() -> &'static str {
    ""
}

pub async fn view_all(State(state): State<AppState>) -> HtmxResult {
    drill_list(&state, ListMode::View, Notice::default()).await
}

/// Detail view of one drill.
///
/// # Endpoint
///
/// `GET /htmx/drill/view/{id}?backEndpoint=...`
///
/// `backEndpoint` defaults to the drill list and is passed along to the
/// instruction editors so they can return to the same place.
pub async fn view_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<BackQuery>,
) -> HtmxResult {
    let back_endpoint = or_view_list(query.back_endpoint);
    show_drill(&state, id, &back_endpoint, Notice::default()).await
}

pub async fn create_form(State(state): State<AppState>) -> HtmxResult {
    drill_form(
        &state,
        FormTarget::create(),
        &DrillForm::default(),
        Notice::default(),
    )
    .await
}

/// Creates a drill and tags it in one step.
///
/// # Endpoint
///
/// `POST /htmx/drill/create`
///
/// On failure the form is shown again with the submitted values and the error.
pub async fn create(State(state): State<AppState>, fields: FormFields) -> HtmxResult {
    let form = fields.drill_form();
    let response = state.drill_service.create(&form).await?;

    if let Some(error) = response.error() {
        return drill_form(&state, FormTarget::create(), &form, Notice::failed(error)).await;
    }

    details(
        &response,
        &DRILLS.route("create"),
        Notice::success("Drill Created Successfully!"),
    )
}

pub async fn modify_list(State(state): State<AppState>) -> HtmxResult {
    drill_list(&state, ListMode::Modify, Notice::default()).await
}

pub async fn modify_form(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.drill_service.get(id).await?;

    match (response.payload(), response.error()) {
        (Some(drill), _) => {
            drill_form(
                &state,
                FormTarget::modify(id),
                &DrillForm::from(drill),
                Notice::default(),
            )
            .await
        }
        (None, error) => {
            let notice = error.map(Notice::failed).unwrap_or_default();
            drill_list(&state, ListMode::Modify, notice).await
        }
    }
}

/// Updates a drill's name, tags and related drills.
///
/// # Endpoint
///
/// `POST /htmx/drill/modify/{id}`
///
/// A drill that no longer exists sends the admin back to the modify list;
/// any other failure shows the form again with the submitted values.
pub async fn modify(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    fields: FormFields,
) -> HtmxResult {
    let form = fields.drill_form();
    let response = state.drill_service.update(id, &form).await?;

    match response.error() {
        None => details(
            &response,
            &DRILLS.route("modify"),
            Notice::success("Drill Updated Successfully!"),
        ),
        Some(error) if response.status() == StatusCode::NOT_FOUND => {
            drill_list(&state, ListMode::Modify, Notice::failed(error)).await
        }
        Some(error) => {
            drill_form(&state, FormTarget::modify(id), &form, Notice::failed(error)).await
        }
    }
}

pub async fn delete_list(State(state): State<AppState>) -> HtmxResult {
    drill_list(&state, ListMode::Delete, Notice::default()).await
}

pub async fn confirm_delete(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.drill_service.get(id).await?;

    match (response.payload(), response.error()) {
        (Some(drill), _) => render(&ConfirmDelete {
            window_title: "Confirm Drill Deletion:".to_string(),
            id: id.to_string(),
            name: drill.name.clone(),
            cancel_endpoint: DRILLS.route("delete"),
            confirm_endpoint: DRILLS.item_route("delete", id),
        }),
        (None, error) => {
            let notice = error.map(Notice::failed).unwrap_or_default();
            drill_list(&state, ListMode::Delete, notice).await
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> HtmxResult {
    let response = state.drill_service.delete(id).await?;
    let notice = Notice::outcome(&response, "Drill Successfully Deleted!");
    drill_list(&state, ListMode::Delete, notice).await
}

fn drill_view_link(drill_id: i64, back_endpoint: &str) -> String {
    with_query(
        &DRILLS.item_route("view", drill_id),
        "backEndpoint",
        back_endpoint,
    )
}

/// Shows the drill after an instruction edit, with the outcome in the banner.
async fn after_instructions_edit(
    state: &AppState,
    drill_id: i64,
    starting_endpoint: &str,
    response: &BackendResponse<Drill>,
    success: &str,
) -> HtmxResult {
    match response.error() {
        None => details(response, starting_endpoint, Notice::success(success)),
        Some(error) => show_drill(state, drill_id, starting_endpoint, Notice::failed(error)).await,
    }
}

/// Empty instructions form for a drill.
///
/// # Endpoint
///
/// `GET /htmx/drill/{drill_id}/instructions/create?startingEndpoint=...`
pub async fn create_instructions_form(
    State(state): State<AppState>,
    Path(drill_id): Path<i64>,
    Query(query): Query<StartingQuery>,
) -> HtmxResult {
    let starting_endpoint = or_view_list(query.starting_endpoint);
    let response = state.drill_service.get(drill_id).await?;

    let window_title = match response.payload() {
        Some(drill) => format!("Create Instructions for Drill: {}", drill.name),
        None => "Create Instructions".to_string(),
    };

    render(&InstructionsFormView {
        notice: Notice::default(),
        window_title,
        post_endpoint: with_query(
            &format!("/htmx/drill/{drill_id}/instructions/create"),
            "startingEndpoint",
            &starting_endpoint,
        ),
        button_text: "Create Instructions".to_string(),
        cancel_endpoint: drill_view_link(drill_id, &starting_endpoint),
        description_text: String::new(),
        video_id_text: String::new(),
        first_step: String::new(),
        other_steps: Vec::new(),
    })
}

pub async fn create_instructions(
    State(state): State<AppState>,
    Path(drill_id): Path<i64>,
    Query(query): Query<StartingQuery>,
    fields: FormFields,
) -> HtmxResult {
    let starting_endpoint = or_view_list(query.starting_endpoint);
    let response = state
        .drill_service
        .add_instructions(drill_id, fields.instructions())
        .await?;

    after_instructions_edit(
        &state,
        drill_id,
        &starting_endpoint,
        &response,
        "Instructions Created Successfully!",
    )
    .await
}

/// One more step input for the instructions form.
///
/// # Endpoint
///
/// `GET /htmx/drill/instructions/add_step`
pub async fn add_step() -> HtmxResult {
    render(&InstructionsAddStep {})
}

/// Instructions form prefilled with the instructions named `description`.
///
/// # Endpoint
///
/// `GET /htmx/drill/{drill_id}/instructions/modify/{description}?startingEndpoint=...`
pub async fn modify_instructions_form(
    State(state): State<AppState>,
    Path((drill_id, description)): Path<(i64, String)>,
    Query(query): Query<StartingQuery>,
) -> HtmxResult {
    let starting_endpoint = or_view_list(query.starting_endpoint);
    let response = state
        .drill_service
        .find_instructions(drill_id, &description)
        .await?;

    let (drill, instructions) = match response.into_result() {
        Ok(found) => found,
        Err(error) => {
            return show_drill(&state, drill_id, &starting_endpoint, Notice::failed(&error)).await;
        }
    };

    render(&InstructionsFormView {
        notice: Notice::default(),
        window_title: format!("Modify Instructions for Drill: {}", drill.name),
        post_endpoint: with_query(
            &format!(
                "/htmx/drill/{drill_id}/instructions/modify/{}",
                encode_segment(&description)
            ),
            "startingEndpoint",
            &starting_endpoint,
        ),
        button_text: "Update Instructions".to_string(),
        cancel_endpoint: drill_view_link(drill_id, &starting_endpoint),
        video_id_text: instructions.video_id.clone().unwrap_or_default(),
        first_step: instructions.first_step().to_string(),
        other_steps: instructions.steps_after_first().to_vec(),
        description_text: description,
    })
}

pub async fn modify_instructions(
    State(state): State<AppState>,
    Path((drill_id, description)): Path<(i64, String)>,
    Query(query): Query<StartingQuery>,
    fields: FormFields,
) -> HtmxResult {
    let starting_endpoint = or_view_list(query.starting_endpoint);
    let response = state
        .drill_service
        .modify_instructions(drill_id, &description, fields.instructions())
        .await?;

    after_instructions_edit(
        &state,
        drill_id,
        &starting_endpoint,
        &response,
        "Instructions Updated Successfully!",
    )
    .await
}

pub async fn confirm_delete_instructions(
    State(state): State<AppState>,
    Path((drill_id, description)): Path<(i64, String)>,
    Query(query): Query<StartingQuery>,
) -> HtmxResult {
    let starting_endpoint = or_view_list(query.starting_endpoint);
    let response = state.drill_service.get(drill_id).await?;

    let name = match response.payload() {
        Some(drill) => format!("{}: {description}", drill.name),
        None => description.clone(),
    };

    render(&ConfirmDelete {
        window_title: "Confirm Instruction Deletion:".to_string(),
        id: format!("Drill {drill_id}"),
        name,
        cancel_endpoint: drill_view_link(drill_id, &starting_endpoint),
        confirm_endpoint: with_query(
            &format!(
                "/htmx/drill/{drill_id}/instructions/delete/{}",
                encode_segment(&description)
            ),
            "startingEndpoint",
            &starting_endpoint,
        ),
    })
}

pub async fn delete_instructions(
    State(state): State<AppState>,
    Path((drill_id, description)): Path<(i64, String)>,
    Query(query): Query<StartingQuery>,
) -> HtmxResult {
    let starting_endpoint = or_view_list(query.starting_endpoint);
    let response = state
        .drill_service
        .remove_instructions(drill_id, &description)
        .await?;

    after_instructions_edit(
        &state,
        drill_id,
        &starting_endpoint,
        &response,
        "Instructions Deleted Successfully!",
    )
    .await
}
