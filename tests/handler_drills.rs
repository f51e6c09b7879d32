mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─── HTMX GATE ───

#[tokio::test]
async fn test_fragment_requires_htmx_header() {
    let backend = MockServer::start().await;
    common::mock_empty_lists(&backend).await;
    let server = common::make_server(&backend.uri());

    let response = server.get("/htmx/drill/view").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fragment_rejects_false_htmx_header() {
    let backend = MockServer::start().await;
    common::mock_empty_lists(&backend).await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/view")
        .add_header("HX-Request", "false")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_htmx_renders_nothing() {
    let server = common::make_server(common::UNREACHABLE);

    let response = server
        .get("/htmx/drill/empty_htmx")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
}

// ─── LIST ───

#[tokio::test]
async fn test_view_all_lists_drills() {
    let backend = MockServer::start().await;
    common::mock_get(
        &backend,
        "/drill",
        json!([common::drill_json(1, "Jab"), common::drill_json(2, "Cross")]),
    )
    .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/view")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Total Drills: 2"));
    assert!(html.contains("Jab"));
    assert!(html.contains("/htmx/drill/view/1"));
    assert!(html.contains("/htmx/drill/view/2"));
}

#[tokio::test]
async fn test_delete_list_links_to_confirmation() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill", json!([common::drill_json(4, "Hook")])).await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/delete")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("Choose Drill to Delete"));
    assert!(html.contains("/htmx/drill/confirm_delete/4"));
}

#[tokio::test]
async fn test_backend_failure_shows_error_banner() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drill"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/view")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Internal Error: Please try again later.")
    );
}

#[tokio::test]
async fn test_unreachable_backend_redirects_to_error_page() {
    let server = common::make_server(common::UNREACHABLE);

    let response = server
        .get("/htmx/drill/view")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.header("hx-redirect"), "/error/500.html");
}

#[tokio::test]
async fn test_slow_backend_redirects_to_error_page() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drill"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&backend)
        .await;
    let server = common::make_server_with_timeout(&backend.uri(), 1);

    let response = server
        .get("/htmx/drill/view")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.header("hx-redirect"), "/error/500.html");
}

// ─── VIEW ───

#[tokio::test]
async fn test_view_one_missing_drill() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drill/id/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/view/7")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Drill 7 does not exist."));
}

#[tokio::test]
async fn test_view_one_ignores_foreign_back_endpoint() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill/id/1", common::drill_json(1, "Jab")).await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/view/1?backEndpoint=https://evil.example")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("Jab"));
    assert!(!html.contains("evil.example"));
    assert!(html.contains("/htmx/drill/view"));
}

// ─── CREATE ───

#[tokio::test]
async fn test_create_assigns_tags_after_creation() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/drill"))
        .and(body_json(json!({ "name": "Jab" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::drill_json(5, "Jab")))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/drill/id/5"))
        .and(body_json(json!({
            "name": "Jab",
            "categories": [1],
            "sub_categories": [],
            "related_drills": [],
            "instructions": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::drill_json(5, "Jab")))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/create")
        .add_header("HX-Request", "true")
        .form(&[("name", "Jab"), ("category_ids", "1")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Drill Created Successfully!"));
}

#[tokio::test]
async fn test_create_rolls_back_when_update_fails() {
    let backend = MockServer::start().await;
    common::mock_empty_lists(&backend).await;
    Mock::given(method("POST"))
        .and(path("/drill"))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::drill_json(5, "Jab")))
        .mount(&backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/drill/id/5"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": "Bad Request", "message": "Unknown category" })),
        )
        .mount(&backend)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/drill/id/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/create")
        .add_header("HX-Request", "true")
        .form(&[("name", "Jab"), ("category_ids", "99")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Unknown category"));
    assert!(!html.contains("Drill Created Successfully!"));
}

#[tokio::test]
async fn test_create_rejects_blank_name_without_backend_call() {
    let backend = MockServer::start().await;
    common::mock_empty_lists(&backend).await;
    Mock::given(method("POST"))
        .and(path("/drill"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/create")
        .add_header("HX-Request", "true")
        .form(&[("name", "   ")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Validation Error"));
}

// ─── MODIFY ───

#[tokio::test]
async fn test_modify_missing_drill_returns_to_list() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill", json!([common::drill_json(1, "Jab")])).await;
    Mock::given(method("GET"))
        .and(path("/drill/id/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/modify/9")
        .add_header("HX-Request", "true")
        .form(&[("name", "Hook")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Drill 9 does not exist."));
    assert!(html.contains("Choose Drill to Modify"));
}

#[tokio::test]
async fn test_modify_rejected_update_shows_form_again() {
    let backend = MockServer::start().await;
    common::mock_empty_lists(&backend).await;
    common::mock_get(&backend, "/drill/id/4", common::drill_json(4, "Hook")).await;
    Mock::given(method("PUT"))
        .and(path("/drill/id/4"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": "Bad Request", "message": "Name already taken" })),
        )
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/modify/4")
        .add_header("HX-Request", "true")
        .form(&[("name", "Uppercut")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Bad Request: Name already taken"));
    assert!(html.contains("Update Drill"));
    assert!(html.contains("value=\"Uppercut\""));
    assert!(html.contains("/htmx/drill/modify/4"));
}

// ─── DELETE ───

#[tokio::test]
async fn test_delete_reports_success() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill", json!([])).await;
    Mock::given(method("DELETE"))
        .and(path("/drill/id/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/delete/3")
        .add_header("HX-Request", "true")
        .await;

    assert!(response.text().contains("Drill Successfully Deleted!"));
}

#[tokio::test]
async fn test_delete_reports_missing_drill() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill", json!([])).await;
    Mock::given(method("DELETE"))
        .and(path("/drill/id/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/delete/3")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("Drill 3 does not exist."));
    assert!(!html.contains("Drill Successfully Deleted!"));
}

// ─── INSTRUCTIONS ───

#[tokio::test]
async fn test_create_instructions_appends_to_drill() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill/id/2", common::drill_json(2, "Cross")).await;
    Mock::given(method("PUT"))
        .and(path("/drill/id/2"))
        .and(body_json(json!({
            "name": "Cross",
            "categories": [],
            "sub_categories": [],
            "related_drills": [],
            "instructions": [{
                "description": "Basic",
                "steps": ["Rotate hips", "Extend arm"]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::drill_json(2, "Cross")))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(&backend.uri());

    let response = server
        .post("/htmx/drill/2/instructions/create")
        .add_header("HX-Request", "true")
        .form(&[
            ("description", "Basic"),
            ("steps", "Rotate hips"),
            ("steps", "Extend arm"),
            ("video_id", ""),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Instructions Created Successfully!"));
}

#[tokio::test]
async fn test_modify_instructions_form_prefills_steps() {
    let backend = MockServer::start().await;
    let mut drill = common::drill_json(2, "Cross");
    drill["instructions"] = json!([{
        "description": "Basic Guard",
        "steps": ["Hands up", "Chin down", "Elbows in"],
        "video_id": "abc123"
    }]);
    common::mock_get(&backend, "/drill/id/2", drill).await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/2/instructions/modify/Basic%20Guard")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Modify Instructions for Drill: Cross"));
    assert!(html.contains(">Hands up</textarea>"));
    assert!(html.contains("Chin down"));
    assert!(html.contains("Elbows in"));
    assert!(html.contains("abc123"));
    assert!(html.contains("/htmx/drill/2/instructions/modify/Basic%20Guard"));
}

#[tokio::test]
async fn test_modify_unknown_instructions_shows_retry_message() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill/id/2", common::drill_json(2, "Cross")).await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/2/instructions/modify/Advanced%20Guard")
        .add_header("HX-Request", "true")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Advanced Guard does not exist, please try again.")
    );
}

#[tokio::test]
async fn test_confirm_delete_instructions_encodes_description() {
    let backend = MockServer::start().await;
    common::mock_get(&backend, "/drill/id/2", common::drill_json(2, "Cross")).await;
    let server = common::make_server(&backend.uri());

    let response = server
        .get("/htmx/drill/2/instructions/confirm_delete/Basic%20Guard")
        .add_header("HX-Request", "true")
        .await;

    let html = response.text();
    assert!(html.contains("Cross: Basic Guard"));
    assert!(html.contains("/htmx/drill/2/instructions/delete/Basic%20Guard"));
}
