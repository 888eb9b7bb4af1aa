//! Integration tests for the file tree service.

mod common;

use drivehub_core::error::ErrorKind;
use drivehub_entity::fs::EntryKind;
use drivehub_service::api::FileApi;

#[tokio::test]
async fn test_list_seeded_tree() {
    let vault = common::TestVault::new().await;

    let root = vault.files.list_dir("/").await.unwrap();
    assert_eq!(root, vec!["Documents", "Images", "Downloads"]);

    let docs = vault.files.list_dir("/Documents").await.unwrap();
    assert_eq!(docs, vec!["work", "personal"]);
}

#[tokio::test]
async fn test_list_unknown_directory_is_not_found() {
    let vault = common::TestVault::new().await;

    let err = vault.files.list_dir("/Music").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_directory_then_descend() {
    let vault = common::TestVault::new().await;

    vault
        .files
        .create_entry("/Documents", "archive", EntryKind::Directory)
        .await
        .unwrap();

    let docs = vault.files.list_dir("/Documents").await.unwrap();
    assert_eq!(docs.last().map(String::as_str), Some("archive"));

    // A new directory is immediately listable and empty.
    let archive = vault.files.list_dir("/Documents/archive").await.unwrap();
    assert!(archive.is_empty());
}

#[tokio::test]
async fn test_create_file_is_not_listable() {
    let vault = common::TestVault::new().await;

    vault
        .files
        .create_entry("/Documents", "notes.txt", EntryKind::File)
        .await
        .unwrap();

    assert!(
        vault
            .files
            .list_dir("/Documents")
            .await
            .unwrap()
            .contains(&"notes.txt".to_string())
    );
    let err = vault.files.list_dir("/Documents/notes.txt").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_under_missing_parent_fails() {
    let vault = common::TestVault::new().await;

    let err = vault
        .files
        .create_entry("/Videos", "raw", EntryKind::Directory)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_directory_unregisters_it() {
    let vault = common::TestVault::new().await;

    vault.files.delete_entry("/Documents").await.unwrap();

    assert!(
        !vault
            .files
            .list_dir("/")
            .await
            .unwrap()
            .contains(&"Documents".to_string())
    );
    let err = vault.files.list_dir("/Documents").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_ordered() {
    let vault = common::TestVault::new().await;

    let hits = vault.files.search("do").await.unwrap();

    let paths: Vec<&str> = hits.iter().map(|h| h.path.as_str()).collect();
    assert_eq!(paths, vec!["/Documents", "/Downloads"]);
    assert_eq!(hits[0].kind, EntryKind::Directory);
}

#[tokio::test]
async fn test_search_sees_newly_created_entries() {
    let vault = common::TestVault::new().await;

    vault
        .files
        .create_entry("/Documents", "quarterly-report.pdf", EntryKind::File)
        .await
        .unwrap();

    let hits = vault.files.search("quarterly").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/Documents/quarterly-report.pdf");
    assert_eq!(hits[0].kind, EntryKind::File);
}

#[tokio::test]
async fn test_search_no_match_is_empty() {
    let vault = common::TestVault::new().await;

    assert!(vault.files.search("zzz").await.unwrap().is_empty());
}
