/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for balanced-adapter tests

use balanced_adapter::{BalancedClient, ClientConfig, Environment};
use wiremock::MockServer;

pub const TEST_KEY: &str = "ak-test-2k1wYjdBOvkFkTFfscQK7RbLf";
pub const TEST_MARKETPLACE: &str = "TEST-MP5m04ORxNlNDm1bB7nkcgSY";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client authenticated with the test key and scoped to the test marketplace
pub fn keyed_client(server: &MockServer) -> BalancedClient {
    BalancedClient::new(Environment::new(
        server.uri(),
        Some(TEST_KEY.to_string()),
        Some(TEST_MARKETPLACE.to_string()),
    ))
    .expect("client init")
}

/// Client without credentials
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> BalancedClient {
    BalancedClient::new(Environment::new(server.uri(), None, None)).expect("client init")
}

#[allow(dead_code)]
pub fn client_with_config(server: &MockServer, config: ClientConfig) -> BalancedClient {
    BalancedClient::with_config(
        config,
        Environment::new(server.uri(), Some(TEST_KEY.to_string()), None),
    )
    .expect("client init")
}

/// Error envelope as the API returns it
#[allow(dead_code)]
pub fn error_envelope(status_code: u16, category_code: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "Bad Request",
        "status_code": status_code,
        "category_type": "request",
        "category_code": category_code,
        "description": description,
        "additional": null,
        "extras": {},
        "request_id": "OHMf2b8a0ee9b2e11e2a9a5026ba7cac9da"
    })
}
