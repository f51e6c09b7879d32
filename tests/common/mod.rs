#![allow(dead_code)]

use axum_test::TestServer;
use defense_drill_admin::config::Config;
use defense_drill_admin::routes::app_router;
use defense_drill_admin::state::AppState;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address nothing listens on; requests to it fail at connect time.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub fn test_config(rest_api_url: &str) -> Config {
    Config {
        rest_api_url: rest_api_url.to_string(),
        security_api_url: format!("{}/user", rest_api_url.trim_end_matches('/')),
        listen_addr: "127.0.0.1:0".to_string(),
        server_address: "localhost".to_string(),
        profile: "dev".to_string(),
        backend_timeout_seconds: 5,
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state(rest_api_url: &str) -> AppState {
    AppState::from_config(&test_config(rest_api_url)).unwrap()
}

/// Full application router backed by the given REST API address.
pub fn make_server(rest_api_url: &str) -> TestServer {
    TestServer::new(app_router(create_test_state(rest_api_url))).unwrap()
}

/// Same as [`make_server`], with outbound calls cut off after `seconds`.
pub fn make_server_with_timeout(rest_api_url: &str, seconds: u64) -> TestServer {
    let config = Config {
        backend_timeout_seconds: seconds,
        ..test_config(rest_api_url)
    };
    TestServer::new(app_router(AppState::from_config(&config).unwrap())).unwrap()
}

pub fn drill_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "categories": [],
        "sub_categories": [],
        "related_drills": [],
        "instructions": []
    })
}

pub fn category_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "description": format!("{name} description") })
}

pub fn user_json(id: i64, username: &str, roles: &[&str]) -> Value {
    json!({ "id": id, "username": username, "roles": roles })
}

/// Answers `GET {route}` with `200` and `body`.
pub async fn mock_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answers every list endpoint with an empty `200`.
pub async fn mock_empty_lists(server: &MockServer) {
    for route in ["/drill", "/category", "/sub_category", "/user"] {
        mock_get(server, route, json!([])).await;
    }
}
