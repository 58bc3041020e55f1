//! Integration test for the Graph API user profile endpoint
//!
//! Verifies that GraphClient::get_user_info() correctly fetches
//! and parses the /me response, and that a rejected token is classified.

use sharelink_core::ports::IProfileProvider;
use sharelink_graph::{client::GraphClient, provider::GraphShareProvider, GraphError};

use crate::common;

#[tokio::test]
async fn test_get_user_info_returns_profile() {
    let (_server, client) = common::setup_graph_mock().await;

    let user_info = client.get_user_info().await.expect("get_user_info failed");

    assert_eq!(user_info.display_name, "Test User");
    assert_eq!(user_info.email, "test@example.com");
    assert_eq!(user_info.id, "user-test-001");
}

#[tokio::test]
async fn test_provider_get_user_info() {
    let (_server, client) = common::setup_graph_mock().await;
    let provider = GraphShareProvider::new(client);

    let user_info = provider.get_user_info().await.expect("get_user_info failed");
    assert_eq!(user_info.display_name, "Test User");
}

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let (server, _) = common::setup_graph_mock().await;
    common::mount_error(&server, "/me", 401, "InvalidAuthenticationToken").await;
    let client = GraphClient::with_base_url("wrong-token", server.uri());

    let err = client.get_user_info().await.unwrap_err();

    match err.downcast_ref::<GraphError>() {
        Some(GraphError::Unauthorized(detail)) => {
            assert!(detail.contains("InvalidAuthenticationToken"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}
