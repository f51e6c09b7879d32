mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─── LIST ───

#[tokio::test]
async fn test_view_all_lists_users() {
    let backend = MockServer::start().await;
    common::mock_get(
        &backend,
        "/user",
        json!([
            common::user_json(1, "coach01", &["ADMIN"]),
            common::user_json(2, "fighter7", &["USER"])
        ]),
    )
    .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/user/view")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Total Users: 2"));
    assert!(html.contains("fighter7"));
    assert!(html.contains("/htmx/user/view/2"));
}

#[tokio::test]
async fn test_user_routes_require_htmx() {
    let server = common::make_server(common::UNREACHABLE);

    server
        .get("/htmx/user/create")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ─── VIEW ───

#[tokio::test]
async fn test_view_one_lists_roles() {
    let backend = MockServer::start().await;
    common::mock_get(
        &backend,
        "/user/id/1",
        common::user_json(1, "coach01", &["ADMIN", "USER"]),
    )
    .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/user/view/1")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("coach01"));
    assert!(html.contains("ADMIN"));
    assert!(html.contains("USER"));
}

#[tokio::test]
async fn test_view_one_missing_user_falls_back_to_list() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/user", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/user/id/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/user/view/5")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("User 5 does not exist."));
    assert!(html.contains("Total Users: 0"));
}

// ─── CREATE ───

#[tokio::test]
async fn test_create_drops_unknown_roles() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .and(body_json(json!({
            "username": "coach01",
            "password": "password1",
            "roles": ["ADMIN"]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(common::user_json(3, "coach01", &["ADMIN"])),
        )
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/user/create")
        .add_header("HX-Request", "true")
        .form(&[
            ("username", "coach01"),
            ("password", "password1"),
            ("roles", "ADMIN"),
            ("roles", "SUPERUSER"),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("User Created Successfully!"));
}

#[tokio::test]
async fn test_create_short_password_is_rejected_locally() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/user/create")
        .add_header("HX-Request", "true")
        .form(&[("username", "coach01"), ("password", "short")])
        .await;

    let html = response.text();
    assert!(html.contains("Password must be between 8 and 31 characters"));
    assert!(html.contains("coach01"));
}

// ─── MODIFY ───

#[tokio::test]
async fn test_modify_posts_to_user_id() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/id/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::user_json(3, "coach02", &["USER"])),
        )
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/user/modify/3")
        .add_header("HX-Request", "true")
        .form(&[
            ("username", "coach02"),
            ("password", "password2"),
            ("roles", "USER"),
        ])
        .await;

    let html = response.text();
    assert!(html.contains("User Modified Successfully!"));
    assert!(html.contains("coach02"));
}

// ─── DELETE ───

#[tokio::test]
async fn test_delete_backend_failure_is_reported() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/user", json!([])).await;
    Mock::given(method("DELETE"))
        .and(path("/user/id/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/user/delete/3")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("Internal Error: Please try again later."));
    assert!(!html.contains("User Successfully Deleted!"));
}
