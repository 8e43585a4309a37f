//! Debug endpoint that terminates the process.
//!
//! Answers with a 500 and schedules a delayed exit so the response bytes have
//! a chance to reach the client first. The delay is best effort: nothing
//! waits for the socket to be flushed.

use std::time::Duration;

use axum::http::StatusCode;

use crate::config::CRASH_EXIT_CODE;
use crate::state::{AppState, ExitHook};

/// Body returned before the process exits
pub const CRASH_BODY: &str = "crashing now\n";

/// Crash handler. Schedules the exit, then returns the response.
pub fn crash(state: &AppState) -> (StatusCode, &'static str) {
    schedule_exit(state.exit.clone(), state.crash_delay);
    (StatusCode::INTERNAL_SERVER_ERROR, CRASH_BODY)
}

/// Spawn a task that calls `exit` with [`CRASH_EXIT_CODE`] after `delay`.
pub fn schedule_exit(exit: ExitHook, delay: Duration) {
    tracing::warn!(
        delay_ms = delay.as_millis() as u64,
        code = CRASH_EXIT_CODE,
        "Crash requested, exiting after response"
    );

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::error!(code = CRASH_EXIT_CODE, "Terminating process");
        exit(CRASH_EXIT_CODE);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthState;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_schedule_exit_waits_for_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let exit: ExitHook = Arc::new(move |code| {
            let _ = tx.send(code);
        });

        schedule_exit(exit, Duration::from_millis(100));

        // Not yet
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());

        let code = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("exit hook not called in time");
        assert_eq!(code, Some(1));
    }

    #[tokio::test]
    async fn test_crash_responds_then_exits() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let exit: ExitHook = Arc::new(move |code| {
            let _ = tx.send(code);
        });
        let state = AppState::with_exit_hook(HealthState::new(), exit, Duration::from_millis(10));

        let response = crash(&state);
        assert_eq!(response, (StatusCode::INTERNAL_SERVER_ERROR, "crashing now\n"));

        let code = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("exit hook not called in time");
        assert_eq!(code, Some(CRASH_EXIT_CODE));
    }
}
