//! Process health flag.
//!
//! The flag starts healthy and only ever moves to unhealthy, once the
//! shutdown routine begins draining. Clones share the same flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared, one-way health flag
#[derive(Debug, Clone)]
pub struct HealthState {
    healthy: Arc<AtomicBool>,
}

impl HealthState {
    /// Create a new health state (initially healthy)
    pub fn new() -> Self {
        Self {
            healthy: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the process as unhealthy.
    ///
    /// There is no way back: once unhealthy, every subsequent health check
    /// reports failure until the process exits.
    pub fn mark_unhealthy(&self) {
        if self.healthy.swap(false, Ordering::SeqCst) {
            tracing::info!("Health flag set to unhealthy");
        }
    }

    /// Check whether the process should still receive traffic
    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}
