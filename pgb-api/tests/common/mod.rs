//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::net::TcpListener;

use pgb_api::BuildClient;
use pgb_core::config::ClientConfig;
use wiremock::MockServer;

pub const USERNAME: &str = "alice@example.com";
pub const PASSWORD: &str = "s3cret:pw";

/// Start a mock build service.
pub async fn start_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing at the given base URL with test credentials.
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::new(USERNAME, PASSWORD)
        .with_base_url(base_url)
        .with_connect_timeout_secs(5)
        .with_request_timeout_secs(10)
}

/// Client talking to a mock server.
pub fn client_for(server: &MockServer) -> BuildClient {
    BuildClient::new(&test_config(&server.uri())).expect("failed to build client")
}

/// Client pointed at a local port with nothing listening on it.
pub fn unreachable_client() -> BuildClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let port = listener.local_addr().expect("no local addr").port();
    drop(listener);
    BuildClient::new(&test_config(&format!("http://127.0.0.1:{port}")))
        .expect("failed to build client")
}

/// Write a fake application package into a temp dir.
pub fn write_package(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write package");
    path
}
