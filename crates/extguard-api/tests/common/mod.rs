//! Common test infrastructure for extguard-api tests
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use extguard_api::HttpGateway;
use extguard_core::ApiConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FIXED_PATH: &str = "/api/extensions/fixed";
pub const CUSTOM_PATH: &str = "/api/extensions/custom";

/// Build a gateway pointed at the mock server
pub fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(&ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("mock server uri is a valid base")
}

/// Base URL of a local port with nothing listening
///
/// A dropped `MockServer` goes back to wiremock's pool and keeps accepting
/// connections, so it cannot stand in for a dead backend.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Backend-shaped fixed list
pub fn fixed_list_json() -> Value {
    json!([
        {"id": 1, "name": "bat", "blocked": false},
        {"id": 5, "name": "exe", "blocked": true},
        {"id": 7, "name": "js", "blocked": false}
    ])
}

/// Backend-shaped error envelope
pub fn error_json(code: &str, message: &str) -> Value {
    json!({"code": code, "message": message, "timestamp": "2025-11-02T10:15:30"})
}

/// Mount a GET endpoint returning the given JSON
pub async fn mock_get_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an endpoint that always answers with `status`
pub async fn mock_status(server: &MockServer, verb: &str, route: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
