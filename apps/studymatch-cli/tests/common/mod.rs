//! Shared helpers for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use studymatch_cli::config::Config;
use studymatch_cli::ApiClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock StudyMatch server and a client pointed at it
pub struct TestContext {
    pub server: MockServer,
    pub client: ApiClient,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = ApiClient::new(Config {
            api_url: server.uri(),
            timeout_secs: 5,
        })
        .expect("client for mock server");
        Self { server, client }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Answer `verb path` with a JSON body
    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb path` with a status and no body
    pub async fn mock_status(&self, verb: &str, route: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

pub fn user_json(id: i64, name: &str, netid: &str, group_id: Option<i64>) -> Value {
    json!({"id": id, "name": name, "netid": netid, "group_id": group_id})
}

pub fn group_json(id: i64, name: &str, users: Vec<Value>) -> Value {
    json!({"id": id, "name": name, "users": users, "tasks": []})
}
