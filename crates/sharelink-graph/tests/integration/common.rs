//! Shared test helpers for Graph API integration tests
//!
//! Provides wiremock-based mock server setup for Microsoft Graph API endpoints.
//! Each helper mounts the necessary mock endpoints; `setup_graph_mock` returns a
//! GraphClient pointing at the mock server.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sharelink_graph::client::GraphClient;

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Sets up a mock server with the `/me` endpoint and returns
/// a (MockServer, GraphClient) tuple.
pub async fn setup_graph_mock() -> (MockServer, GraphClient) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "displayName": "Test User",
            "mail": "test@example.com",
            "userPrincipalName": "test@example.com",
            "id": "user-test-001"
        })))
        .mount(&server)
        .await;

    let client = GraphClient::with_base_url(ACCESS_TOKEN, server.uri());

    (server, client)
}

/// Mounts `GET /shares/{share_id}/driveItem` returning the shared view of an item.
///
/// The shared view deliberately carries no `parentReference.path`.
pub async fn mount_share(server: &MockServer, share_id: &str, item_id: &str, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/shares/{share_id}/driveItem").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": item_id,
            "name": name,
            "size": 2048,
            "parentReference": {
                "driveId": "cb3deb5f67996c9b",
                "driveType": "personal"
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts `GET /me/drive/items/{item_id}` returning the owner's view of an item.
pub async fn mount_drive_item(server: &MockServer, item_id: &str, parent_path: &str, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/me/drive/items/{item_id}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": item_id,
            "name": name,
            "size": 2048,
            "parentReference": {
                "driveId": "cb3deb5f67996c9b",
                "id": "CB3DEB5F67996C9B!101",
                "path": parent_path
            },
            "file": { "mimeType": "image/jpeg" }
        })))
        .mount(server)
        .await;
}

/// Mounts an endpoint answering with a Graph error envelope.
pub async fn mount_error(server: &MockServer, api_path: &str, status: u16, code: &str) {
    Mock::given(method("GET"))
        .and(path(api_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "error": {
                "code": code,
                "message": "Mocked failure"
            }
        })))
        .mount(server)
        .await;
}
