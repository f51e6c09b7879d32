//! Page and fragment route configuration.

use crate::state::AppState;
use crate::web::handlers::categories::{self, CategoryPages, Categories, SubCategories};
use crate::web::handlers::{drills, editor_handler, home_handler, modify_handler, users};
use crate::web::middleware::htmx;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Full pages, reachable by normal browser navigation.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /modify` - Index of editable resources
/// - `GET /modify/{resource}` - Editor for drills, categories, sub-categories or users
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/modify", get(modify_handler))
        .route("/modify/{resource}", get(editor_handler))
}

/// HTMX fragment routes, to be nested under `/htmx`.
///
/// Every route answers `404 Not Found` unless the request carries
/// `HX-Request: true`; see [`crate::web::middleware::htmx`].
pub fn htmx_routes() -> Router<AppState> {
    Router::new()
        .nest("/drill", drill_routes())
        .nest("/category", category_routes::<Categories>())
        .nest("/sub_category", category_routes::<SubCategories>())
        .nest("/user", user_routes())
        .route_layer(middleware::from_fn(htmx::layer))
}

fn drill_routes() -> Router<AppState> {
    Router::new()
        .route("/empty_htmx", get(drills::empty_htmx))
        .route("/view", get(drills::view_all))
        .route("/view/{id}", get(drills::view_one))
        .route("/create", get(drills::create_form).post(drills::create))
        .route("/modify", get(drills::modify_list))
        .route(
            "/modify/{id}",
            get(drills::modify_form).post(drills::modify),
        )
        .route("/delete", get(drills::delete_list))
        .route("/confirm_delete/{id}", get(drills::confirm_delete))
        .route("/delete/{id}", post(drills::delete))
        .route("/instructions/add_step", get(drills::add_step))
        .route(
            "/{drill_id}/instructions/create",
            get(drills::create_instructions_form).post(drills::create_instructions),
        )
        .route(
            "/{drill_id}/instructions/modify/{description}",
            get(drills::modify_instructions_form).post(drills::modify_instructions),
        )
        .route(
            "/{drill_id}/instructions/confirm_delete/{description}",
            get(drills::confirm_delete_instructions),
        )
        .route(
            "/{drill_id}/instructions/delete/{description}",
            post(drills::delete_instructions),
        )
}

fn category_routes<K: CategoryPages>() -> Router<AppState> {
    Router::new()
        .route("/view", get(categories::view_all::<K>))
        .route("/view/{id}", get(categories::view_one::<K>))
        .route(
            "/create",
            get(categories::create_form::<K>).post(categories::create::<K>),
        )
        .route("/modify", get(categories::modify_list::<K>))
        .route(
            "/modify/{id}",
            get(categories::modify_form::<K>).post(categories::modify::<K>),
        )
        .route("/delete", get(categories::delete_list::<K>))
        .route("/confirm_delete/{id}", get(categories::confirm_delete::<K>))
        .route("/delete/{id}", post(categories::delete::<K>))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/empty_htmx", get(users::empty_htmx))
        .route("/view", get(users::view_all))
        .route("/view/{id}", get(users::view_one))
        .route("/create", get(users::create_form).post(users::create))
        .route("/modify", get(users::modify_list))
        .route("/modify/{id}", get(users::modify_form).post(users::modify))
        .route("/delete", get(users::delete_list))
        .route("/confirm_delete/{id}", get(users::confirm_delete))
        .route("/delete/{id}", post(users::delete))
}
