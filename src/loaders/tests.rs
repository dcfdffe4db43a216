//! Tests for the tree loaders.

use std::io::Write;

use super::*;
use crate::engine::Navigator;
use crate::error::NavError;
use crate::loader::TreeLoader;
use crate::tree::Folder;
use crate::types::FolderId;

#[tokio::test]
async fn test_fixed_loader_returns_tree() {
    let loader = FixedLoader::new(Folder::new(0, "root"));
    let tree = loader.fetch_initial_tree().await.unwrap();
    assert_eq!(tree.name, "root");
}

#[tokio::test]
async fn test_bundled_sample_parses() {
    let tree = FixedLoader::sample()
        .unwrap()
        .fetch_initial_tree()
        .await
        .unwrap();
    assert_eq!(tree.name, "Home");
    assert_eq!(tree.count(), 11);
    assert_eq!(tree.max_id(), FolderId(10));
}

#[tokio::test]
async fn test_json_loader_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"id": 3, "name": "root", "contents": [{{"id": 8, "name": "a", "contents": null}}]}}"#
    )
    .unwrap();

    let loader = JsonFileLoader::new(file.path());
    let tree = loader.fetch_initial_tree().await.unwrap();
    assert_eq!(tree.max_id(), FolderId(8));
    assert!(tree.contents[0].contents.is_empty());
}

#[tokio::test]
async fn test_json_loader_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let loader = JsonFileLoader::new(dir.path().join("absent.json"));

    let result = loader.fetch_initial_tree().await;
    assert!(matches!(result, Err(NavError::TreeUnavailable(_))));
}

#[tokio::test]
async fn test_json_loader_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"id\": \"zero\"}}").unwrap();

    let result = JsonFileLoader::new(file.path()).fetch_initial_tree().await;
    assert!(matches!(result, Err(NavError::Malformed(_))));
}

#[tokio::test]
async fn test_navigator_load_success() {
    let mut nav = Navigator::new();
    nav.load(&FixedLoader::sample().unwrap()).await.unwrap();

    assert!(nav.is_initialized());
    assert_eq!(nav.current_folder().unwrap().name, "Home");
    assert_eq!(
        nav.load(&FixedLoader::new(Folder::new(0, "x"))).await,
        Err(NavError::AlreadyInitialized)
    );
}

#[tokio::test]
async fn test_navigator_load_failure_leaves_it_unloaded() {
    let mut nav = Navigator::new();
    let result = nav.load(&FixedLoader::failing("offline")).await;

    assert_eq!(result, Err(NavError::TreeUnavailable("offline".into())));
    assert!(!nav.is_initialized());
    assert_eq!(nav.back(), Err(NavError::NotInitialized));
}

#[tokio::test]
async fn test_navigator_load_through_trait_object() {
    let loader: Box<dyn TreeLoader> = Box::new(FixedLoader::new(Folder::new(0, "root")));
    let mut nav = Navigator::new();
    nav.load(loader.as_ref()).await.unwrap();
    assert_eq!(nav.depth(), 1);
}
