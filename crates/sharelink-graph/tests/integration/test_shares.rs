//! Integration tests for share and drive item lookups

use sharelink_core::domain::{RemoteId, SharedLinkId};
use sharelink_core::ports::IShareProvider;
use sharelink_graph::{provider::GraphShareProvider, GraphError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

fn share(id: &str) -> SharedLinkId {
    id.parse().unwrap()
}

#[tokio::test]
async fn test_get_shared_item() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_share(&server, "s!AmslmcZf6z3Lg98-IHg6iib_9ykDOw", "CB3DEB5F67996C9B!28632", "x.jpg").await;

    let item = client
        .get_shared_item(&share("s!AmslmcZf6z3Lg98-IHg6iib_9ykDOw"))
        .await
        .expect("get_shared_item failed");

    assert_eq!(item.id.as_str(), "CB3DEB5F67996C9B!28632");
    assert_eq!(item.name.as_deref(), Some("x.jpg"));
}

#[tokio::test]
async fn test_get_drive_item() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_drive_item(&server, "ITEM1", "/drive/root:/Pictures/album", "x.jpg").await;

    let item = client
        .get_drive_item(&RemoteId::new("ITEM1".to_string()).unwrap())
        .await
        .expect("get_drive_item failed");

    assert_eq!(item.name, "x.jpg");
    assert_eq!(item.parent_path.as_deref(), Some("/drive/root:/Pictures/album"));
}

#[tokio::test]
async fn test_provider_resolves_both_steps() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_share(&server, "s!ABC", "ITEM1", "x.jpg").await;
    common::mount_drive_item(&server, "ITEM1", "/drive/root:/Pictures", "x.jpg").await;
    let provider = GraphShareProvider::new(client);

    let shared = provider.get_shared_item(&share("s!ABC")).await.unwrap();
    let item = provider.get_drive_item(&shared.id).await.unwrap();

    assert_eq!(item.id, shared.id);
    assert_eq!(item.parent_path.as_deref(), Some("/drive/root:/Pictures"));
}

#[tokio::test]
async fn test_unknown_share_is_not_found() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_error(&server, "/shares/s!GONE/driveItem", 404, "itemNotFound").await;

    let err = client.get_shared_item(&share("s!GONE")).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::NotFound(_))
    ));
    assert!(format!("{err:#}").contains("itemNotFound"));
}

#[tokio::test]
async fn test_throttled_request_reports_retry_after() {
    let (server, client) = common::setup_graph_mock().await;
    Mock::given(method("GET"))
        .and(path("/me/drive/items/ITEM1"))
        .respond_with(ResponseTemplate::new(429).append_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let err = client
        .get_drive_item(&RemoteId::new("ITEM1".to_string()).unwrap())
        .await
        .unwrap_err();

    match err.downcast_ref::<GraphError>() {
        Some(GraphError::TooManyRequests { retry_after }) => {
            assert_eq!(*retry_after, Some(std::time::Duration::from_secs(7)));
        }
        other => panic!("expected TooManyRequests, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let (server, client) = common::setup_graph_mock().await;
    Mock::given(method("GET"))
        .and(path("/shares/s!BAD/driveItem"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_shared_item(&share("s!BAD")).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::InvalidResponse(_))
    ));
}
