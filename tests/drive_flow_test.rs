//! Integration tests for the drive service / store refresh cycle.

mod common;

use drivehub_core::error::ErrorKind;
use drivehub_core::types::{DriveCategory, DriveId};
use drivehub_entity::drive::{CreateDrive, DriveColor, DriveIcon, DriveUpdate};
use drivehub_service::api::DriveApi;
use drivehub_store::DriveAction;

#[tokio::test]
async fn test_refresh_populates_every_category() {
    let vault = common::TestVault::new().await;

    vault.refresh().await;

    let store = vault.store.read().await;
    let state = store.state();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.drives.get(DriveCategory::Local).len(), 2);
    assert_eq!(state.drives.get(DriveCategory::Remote).len(), 1);
    assert_eq!(state.drives.get(DriveCategory::Cloud).len(), 1);
}

#[tokio::test]
async fn test_added_drive_shows_up_after_refresh() {
    let vault = common::TestVault::new().await;
    vault.refresh().await;

    let created = vault
        .drives
        .add_drive(
            DriveCategory::Cloud,
            CreateDrive {
                name: "Offsite Archive".to_string(),
                drive_type: "Cloud Storage".to_string(),
                used: 0,
                total: 1 << 40,
                icon: DriveIcon::Cloud,
                color: DriveColor::Emerald,
            },
        )
        .await
        .unwrap();

    vault.refresh().await;

    let store = vault.store.read().await;
    let cloud = store.state().drives.get(DriveCategory::Cloud);
    assert_eq!(cloud.len(), 2);
    assert!(cloud.iter().any(|d| d.id == created.id));
}

#[tokio::test]
async fn test_service_update_and_store_update_agree() {
    let vault = common::TestVault::new().await;
    vault.refresh().await;

    let id = vault.store.read().await.state().drives.get(DriveCategory::Local)[0]
        .id
        .clone();
    let updates = DriveUpdate {
        name: Some("Renamed Laptop".to_string()),
        ..Default::default()
    };

    // Write through the service, then mirror the change optimistically.
    let updated = vault
        .drives
        .update_drive(DriveCategory::Local, &id, updates.clone())
        .await
        .unwrap()
        .expect("seeded drive should exist");
    assert_eq!(updated.name, "Renamed Laptop");

    vault.store.write().await.dispatch(DriveAction::UpdateDrive {
        category: DriveCategory::Local,
        drive_id: id.clone(),
        updates,
    });

    let store = vault.store.read().await;
    let local = store.state().drives.get(DriveCategory::Local);
    let mirrored = local.iter().find(|d| d.id == id).unwrap();
    assert_eq!(mirrored.name, "Renamed Laptop");

    // The next refresh must not disagree with the optimistic state.
    drop(store);
    vault.refresh().await;
    let store = vault.store.read().await;
    let local = store.state().drives.get(DriveCategory::Local);
    assert_eq!(local.iter().find(|d| d.id == id).unwrap().name, "Renamed Laptop");
}

#[tokio::test]
async fn test_remove_drive_flow() {
    let vault = common::TestVault::new().await;
    vault.refresh().await;

    let id = vault.store.read().await.state().drives.get(DriveCategory::Remote)[0]
        .id
        .clone();

    vault
        .drives
        .remove_drive(DriveCategory::Remote, &id)
        .await
        .unwrap();
    vault.store.write().await.dispatch(DriveAction::RemoveDrive {
        category: DriveCategory::Remote,
        drive_id: id,
    });

    assert!(
        vault
            .store
            .read()
            .await
            .state()
            .drives
            .get(DriveCategory::Remote)
            .is_empty()
    );

    vault.refresh().await;
    assert!(
        vault
            .store
            .read()
            .await
            .state()
            .drives
            .get(DriveCategory::Remote)
            .is_empty()
    );
}

#[tokio::test]
async fn test_stats_for_seeded_drive() {
    let vault = common::TestVault::new().await;
    vault.refresh().await;

    let drive = vault.store.read().await.state().drives.get(DriveCategory::Cloud)[0].clone();
    let stats = vault
        .drives
        .drive_stats(DriveCategory::Cloud, &drive.id)
        .await
        .unwrap();

    assert_eq!(stats.used, drive.used);
    assert_eq!(stats.total, drive.total);
    assert_eq!(stats.available, drive.total - drive.used);
    assert!(stats.last_sync >= drive.last_sync);
}

#[tokio::test]
async fn test_stats_unknown_drive_is_not_found() {
    let vault = common::TestVault::new().await;

    let err = vault
        .drives
        .drive_stats(DriveCategory::Local, &DriveId::new("drive-nope"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_dispatch_action_decoded_from_json() {
    let vault = common::TestVault::new().await;
    vault.refresh().await;

    let id = vault.store.read().await.state().drives.get(DriveCategory::Local)[0]
        .id
        .clone();
    let payload = format!(
        r#"{{"type":"UpdateDrive","category":"local","drive_id":"{id}","updates":{{"used":1024}}}}"#
    );
    let action: DriveAction = serde_json::from_str(&payload).unwrap();

    vault.store.write().await.dispatch(action);

    let store = vault.store.read().await;
    let local = store.state().drives.get(DriveCategory::Local);
    assert_eq!(local.iter().find(|d| d.id == id).unwrap().used, 1024);
}

#[tokio::test]
async fn test_transient_failure_then_recovery() {
    let vault = common::TestVault::new().await;
    vault.refresh().await;
    let populated = vault.store.read().await.state().drives.clone();

    vault.faults.arm();
    vault.refresh().await;

    {
        let store = vault.store.read().await;
        let state = store.state();
        assert!(state.error.is_some());
        // Stale drives stay visible while the error banner is up.
        assert_eq!(state.drives, populated);
    }

    // The fault is one-shot; the next refresh clears the error.
    vault.refresh().await;
    let store = vault.store.read().await;
    assert!(store.state().error.is_none());
}
