//! End-to-end annotation of a directory tree against a mocked Graph API

use std::fs;
use std::sync::Arc;

use sharelink_core::{
    config::RunConfig, domain::AnnotateError, usecases::AnnotateLinksUseCase,
};
use sharelink_graph::provider::GraphShareProvider;
use tempfile::TempDir;

use crate::common;

const PAGE: &str = r#"<p>Trip</p>
<img src="https://1drv.ms/i/s!AmslmcZf6z3Lg98-IHg6iib_9ykDOw?embed=1&width=981&height=740" width="981" height="740" />
<img src="https://1drv.ms/i/s!MISSING?embed=1" />
"#;

#[tokio::test]
async fn test_annotate_tree_against_graph() {
    let (server, client) = common::setup_graph_mock().await;
    common::mount_share(&server, "s!AmslmcZf6z3Lg98-IHg6iib_9ykDOw", "ITEM1", "beach.jpg").await;
    common::mount_drive_item(
        &server,
        "ITEM1",
        "/drive/root:/Pictures/metro-evolved-pictures",
        "beach.jpg",
    )
    .await;
    common::mount_error(&server, "/shares/s!MISSING/driveItem", 404, "itemNotFound").await;

    let dir = TempDir::new().unwrap();
    let page = dir.path().join("posts/trip.html");
    fs::create_dir_all(page.parent().unwrap()).unwrap();
    fs::write(&page, PAGE).unwrap();
    let copy = dir.path().join("drafts/trip-copy.html");
    fs::create_dir_all(copy.parent().unwrap()).unwrap();
    fs::write(&copy, PAGE).unwrap();

    let use_case = AnnotateLinksUseCase::new(Arc::new(GraphShareProvider::new(client)));
    let report = use_case
        .annotate(&RunConfig::for_directory(dir.path()))
        .await
        .expect("annotate failed");

    assert_eq!(report.identifiers_found, 2);
    assert_eq!(report.identifiers_resolved(), 1);
    assert_eq!(report.files_rewritten(), 2);
    assert!(matches!(
        report.failures.as_slice(),
        [AnnotateError::Resolution { id, .. }] if id == "s!MISSING"
    ));

    for file in [&page, &copy] {
        let content = fs::read_to_string(file).unwrap();
        assert!(content.contains(
            "?embed=1&width=981&height=740#Pictures/metro-evolved-pictures/beach.jpg\""
        ));
        assert!(content.contains(r#""https://1drv.ms/i/s!MISSING?embed=1""#));
    }
    // mount_share expects exactly one lookup; verified when the server drops
}
