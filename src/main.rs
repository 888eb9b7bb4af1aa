//! DriveHub Dashboard — mock-backed storage dashboard runtime.
//!
//! Wires the mock data service, drive store, and refresh poller together
//! and logs a dashboard summary until interrupted.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use drivehub_core::config::AppConfig;
use drivehub_core::error::AppError;
use chrono::Utc;
use drivehub_core::types::DriveCategory;
use drivehub_core::types::format::{format_bytes, format_relative};
use drivehub_service::backup::BackupService;
use drivehub_service::device::DeviceService;
use drivehub_service::drive::DriveService;
use drivehub_service::fs::FileService;
use drivehub_service::notification::NotificationService;
use drivehub_service::system::SystemService;
use drivehub_service::{FaultInjector, Latency, seed};
use drivehub_store::DriveStore;
use drivehub_worker::RefreshPoller;

#[tokio::main]
async fn main() {
    let env = std::env::var("DRIVEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Dashboard error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main dashboard run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DriveHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Build the mock backend ───────────────────────────
    let latency = Latency::from_config(&config.service);
    let faults = Arc::new(FaultInjector::new());

    let drive_service = Arc::new(DriveService::new(latency, Arc::clone(&faults)));
    let file_service = Arc::new(FileService::new(latency, Arc::clone(&faults)));
    let backup_service = Arc::new(BackupService::new(latency, Arc::clone(&faults)));
    let device_service = Arc::new(DeviceService::new(latency, Arc::clone(&faults)));
    let notification_service = Arc::new(NotificationService::new(latency, Arc::clone(&faults)));
    let system_service = Arc::new(SystemService::new(
        latency,
        Arc::clone(&faults),
        seed::storage_pool(),
        seed::health(),
    ));

    // ── Step 2: Seed the reference dataset ───────────────────────
    for (category, bucket) in seed::drives() {
        drive_service.load(category, bucket);
    }
    for (path, children) in seed::directories() {
        file_service.load(path, children);
    }
    backup_service.load(seed::backups()).await;
    device_service.load(seed::devices()).await;
    notification_service.load(seed::notifications()).await;
    tracing::info!("Mock backend seeded");

    // ── Step 3: Create the store and run the initial refresh ─────
    let store = Arc::new(RwLock::new(DriveStore::new()));
    drivehub_worker::refresh_drives(drive_service.as_ref(), store.as_ref()).await;
    log_summary(&store, &notification_service, &system_service).await?;

    // ── Step 4: Start the refresh poller ─────────────────────────
    let poller_handle = if config.poller.enabled {
        let poller = RefreshPoller::new(
            Arc::clone(&drive_service),
            Arc::clone(&store),
            &config.poller,
        );
        tracing::info!(
            interval_seconds = config.poller.interval_seconds,
            "Refresh poller enabled"
        );
        Some(poller.spawn())
    } else {
        tracing::info!("Refresh poller disabled");
        None
    };

    // ── Step 5: Wait for shutdown, then tear down the poller ─────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received");

    if let Some(handle) = poller_handle {
        handle.shutdown().await;
    }

    tracing::info!("DriveHub dashboard shut down gracefully");
    Ok(())
}

/// Log a one-shot dashboard summary from the current state.
async fn log_summary(
    store: &RwLock<DriveStore>,
    notifications: &NotificationService,
    system: &SystemService,
) -> Result<(), AppError> {
    {
        let store = store.read().await;
        let state = store.state();
        if let Some(error) = &state.error {
            tracing::warn!(error, "Initial drive fetch failed");
        }
        for category in DriveCategory::ALL {
            for drive in state.drives.get(category) {
                tracing::info!(
                    %category,
                    name = %drive.name,
                    used = %format_bytes(drive.used),
                    total = %format_bytes(drive.total),
                    status = %drive.status,
                    last_sync = %format_relative(drive.last_sync, Utc::now()),
                    "Drive"
                );
            }
        }
    }

    let unread = notifications.unread_count().await?;
    let pool = system.storage_stats().await?;
    let health = system.health_check().await?;
    tracing::info!(
        unread,
        pool_available = %format_bytes(pool.available()),
        health_score = health.score,
        "Vault summary"
    );

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
