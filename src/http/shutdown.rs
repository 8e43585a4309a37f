//! Graceful shutdown and signal handling.
//!
//! On SIGTERM or SIGINT the server will, in order:
//! 1. Mark the health flag unhealthy, so `/healthz` starts failing
//! 2. Stop accepting new connections
//! 3. Wait for existing connections to complete, with no deadline
//!
//! Once drained, the serve future resolves and `main` exits with status 0.

use std::future::Future;

use axum_server::Handle;

use crate::health::HealthState;

/// Setup graceful shutdown on SIGTERM and SIGINT.
pub fn setup_shutdown_handler(handle: Handle, health: HealthState) {
    tokio::spawn(shutdown_on(wait_for_signal(), handle, health));
}

/// Wait for `trigger` to resolve, then run [`drain`].
///
/// `trigger` yields the name of whatever caused the shutdown, for logging.
pub async fn shutdown_on<F>(trigger: F, handle: Handle, health: HealthState)
where
    F: Future<Output = &'static str>,
{
    let signal = trigger.await;
    tracing::info!(signal, "received {}, shutting down", signal);
    drain(&handle, &health);
}

/// Flip the health flag, then stop accepting and let in-flight requests finish.
pub fn drain(handle: &Handle, health: &HealthState) {
    health.mark_unhealthy();

    // No timeout: active connections are never cut off
    handle.graceful_shutdown(None);
    tracing::info!(
        connections = handle.connection_count(),
        "Graceful shutdown initiated, waiting for connections to close"
    );
}

/// Wait for SIGTERM or SIGINT and return the signal name.
#[cfg(unix)]
pub async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    }
}

/// Wait for Ctrl+C (non-Unix platforms).
#[cfg(not(unix))]
pub async fn wait_for_signal() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    "CTRL_C"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[test]
    fn test_drain_marks_unhealthy() {
        let handle = Handle::new();
        let health = HealthState::new();

        drain(&handle, &health);

        assert!(!health.is_healthy());
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_trigger() {
        let (tx, rx) = oneshot::channel::<()>();
        let health = HealthState::new();

        let task = tokio::spawn(shutdown_on(
            async move {
                let _ = rx.await;
                "TEST"
            },
            Handle::new(),
            health.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(health.is_healthy(), "flag must not flip before the trigger");

        tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("shutdown routine did not finish")
            .unwrap();

        assert!(!health.is_healthy());
    }
}
