use crate::{ApiError, resolve_under_root};

use std::fs;

use googletest::prelude::*;
use tempfile::TempDir;

fn static_root() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("index.html"), "<html></html>").unwrap();
    fs::create_dir(root.path().join("data")).unwrap();
    fs::write(root.path().join("data").join("capture.csv"), "1,2,3").unwrap();
    root
}

#[tokio::test]
async fn given_plain_relative_path_when_resolved_then_canonical_file_returned() {
    let root = static_root();

    let resolved = resolve_under_root(root.path(), "data/capture.csv")
        .await
        .unwrap();

    assert_eq!(
        resolved,
        root.path().canonicalize().unwrap().join("data/capture.csv")
    );
}

#[tokio::test]
async fn given_current_dir_components_when_resolved_then_ignored() {
    let root = static_root();

    let resolved = resolve_under_root(root.path(), "./data/./capture.csv").await;

    assert_that!(resolved.is_ok(), eq(true));
}

#[tokio::test]
async fn given_parent_dir_component_when_resolved_then_forbidden() {
    let root = static_root();

    let result = resolve_under_root(root.path(), "data/../../etc/passwd").await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn given_parent_dir_that_stays_inside_when_resolved_then_still_forbidden() {
    let root = static_root();

    let result = resolve_under_root(root.path(), "data/../index.html").await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn given_absolute_path_when_resolved_then_forbidden() {
    let root = static_root();

    let result = resolve_under_root(root.path(), "/etc/passwd").await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn given_missing_file_when_resolved_then_not_found() {
    let root = static_root();

    let result = resolve_under_root(root.path(), "data/missing.csv").await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn given_directory_when_resolved_then_not_found() {
    let root = static_root();

    let result = resolve_under_root(root.path(), "data").await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn given_empty_path_when_resolved_then_not_found() {
    let root = static_root();

    let result = resolve_under_root(root.path(), "").await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn given_symlink_leaving_root_when_resolved_then_forbidden() {
    let root = static_root();
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("secret.txt"), "secret").unwrap();
    std::os::unix::fs::symlink(
        outside.path().join("secret.txt"),
        root.path().join("link.txt"),
    )
    .unwrap();

    let result = resolve_under_root(root.path(), "link.txt").await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn given_symlink_inside_root_when_resolved_then_allowed() {
    let root = static_root();
    std::os::unix::fs::symlink(
        root.path().join("index.html"),
        root.path().join("home.html"),
    )
    .unwrap();

    let result = resolve_under_root(root.path(), "home.html").await;

    assert_that!(result.is_ok(), eq(true));
}
