//! Integration tests using WireMock
//!
//! These tests drive the sample use cases against a mock Haven server and
//! check the full request/response cycle: routing headers, credentials,
//! envelopes and error mapping.

mod accounts;
mod bulletins;
mod forms;
mod principals;
mod scenarios;

use integrations_haven::{AccountInfo, HavenConfig, SampleConsumer};
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::{MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

/// Faction used by every test.
pub fn faction() -> Uuid {
    Uuid::from_u128(0x1111)
}

/// Calling account used by every test.
pub fn account_id() -> Uuid {
    Uuid::from_u128(0x2222)
}

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Consumer pointed at `server` with test credentials.
pub fn consumer(server: &MockServer) -> SampleConsumer {
    consumer_as(server, AccountInfo::with_credentials(account_id(), API_KEY, API_SECRET))
}

/// Consumer pointed at `server` acting as `account`.
pub fn consumer_as(server: &MockServer, account: AccountInfo) -> SampleConsumer {
    let config = HavenConfig::builder()
        .base_url(server.uri())
        .faction_id(faction())
        .build()
        .expect("Failed to build config");
    SampleConsumer::new(config, account)
}

/// Successful single-item envelope.
pub fn item(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "item": body }))
}

/// Successful list envelope.
pub fn items(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "items": body }))
}

/// Successful action envelope.
pub fn action_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true }))
}

/// Envelope reporting failure.
pub fn failed(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": message }))
}
