//! Deterministic transient-failure injection.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;

/// One-shot transient-failure injector shared by the mock services.
///
/// Arming the injector makes the next operation that consults it fail
/// with a transient error; subsequent operations succeed again. This is
/// deterministic on purpose so retry/backpressure UI paths can be tested
/// without flakiness.
#[derive(Debug, Default)]
pub struct FaultInjector {
    armed: AtomicBool,
}

impl FaultInjector {
    /// Create a disarmed injector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the injector; the next checked operation fails.
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Whether a failure is currently pending.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Consume the armed flag, failing the calling operation if set.
    pub fn check(&self, operation: &str) -> AppResult<()> {
        if self.armed.swap(false, Ordering::SeqCst) {
            warn!(operation, "Injected transient failure");
            return Err(AppError::transient(format!(
                "Simulated network failure during {operation}"
            )));
        }
        Ok(())
    }
}
