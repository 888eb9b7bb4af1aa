//! One refresh cycle: fetch every category, dispatch the result.

use tokio::sync::RwLock;
use tracing::warn;

use drivehub_core::result::AppResult;
use drivehub_core::types::DriveCategory;
use drivehub_service::api::DriveApi;
use drivehub_store::{DriveAction, DriveMap, DriveStore};

/// Fetch all three category buckets from the data service and dispatch
/// the outcome into the store.
///
/// The store itself never fetches; this is the mediating caller the
/// store/service split requires. On success the full mapping replaces
/// the previous one and any recorded error is cleared; on failure the
/// error message is recorded and the previous drives are left in place
/// for the UI to keep showing.
pub async fn refresh_drives<A>(api: &A, store: &RwLock<DriveStore>)
where
    A: DriveApi + ?Sized,
{
    store
        .write()
        .await
        .dispatch(DriveAction::SetLoading { loading: true });

    match fetch_all(api).await {
        Ok(drives) => {
            let mut store = store.write().await;
            store.dispatch(DriveAction::SetDrives { drives });
            // A successful fetch supersedes any earlier failure.
            store.dispatch(DriveAction::SetError { message: None });
        }
        Err(err) => {
            warn!(error = %err, "Drive refresh failed");
            store.write().await.dispatch(DriveAction::SetError {
                message: Some(err.to_string()),
            });
        }
    }
}

async fn fetch_all<A>(api: &A) -> AppResult<DriveMap>
where
    A: DriveApi + ?Sized,
{
    let mut drives = DriveMap::default();
    for category in DriveCategory::ALL {
        drives.set(category, api.list_drives(category).await?);
    }
    Ok(drives)
}
