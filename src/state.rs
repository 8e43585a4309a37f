//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::CRASH_EXIT_DELAY;
use crate::health::HealthState;

/// Terminates the process with the given exit status.
///
/// Production uses [`std::process::exit`]; tests substitute a recorder.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Shared application state, cloneable across handlers.
///
/// Holds the health flag read by `/healthz`, and the exit hook and delay used
/// by `/crash`.
#[derive(Clone)]
pub struct AppState {
    pub health: HealthState,
    pub exit: ExitHook,
    pub crash_delay: Duration,
}

impl AppState {
    /// Creates state that exits the real process on `/crash`.
    pub fn new(health: HealthState) -> Self {
        Self::with_exit_hook(health, Arc::new(|code| std::process::exit(code)), CRASH_EXIT_DELAY)
    }

    /// Creates state with a custom exit hook and crash delay.
    pub fn with_exit_hook(health: HealthState, exit: ExitHook, crash_delay: Duration) -> Self {
        Self {
            health,
            exit,
            crash_delay,
        }
    }
}
