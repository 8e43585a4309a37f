//! Health check endpoint for container orchestration.
//!
//! Reports 200 while the process accepts traffic and 500 once shutdown has
//! begun. Used by Kubernetes, ECS and load balancers to stop routing traffic
//! to an instance before it exits.

use axum::http::StatusCode;

use crate::health::HealthState;

/// Body returned while healthy
pub const HEALTHY_BODY: &str = "ok\n";

/// Body returned once the health flag has flipped
pub const UNHEALTHY_BODY: &str = "unhealthy\n";

/// Health check handler.
pub fn healthz(health: &HealthState) -> (StatusCode, &'static str) {
    if health.is_healthy() {
        (StatusCode::OK, HEALTHY_BODY)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, UNHEALTHY_BODY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthz_healthy() {
        let health = HealthState::new();
        assert_eq!(healthz(&health), (StatusCode::OK, "ok\n"));
        assert_eq!(healthz(&health), (StatusCode::OK, "ok\n"));
    }

    #[test]
    fn test_healthz_unhealthy() {
        let health = HealthState::new();
        health.mark_unhealthy();
        assert_eq!(
            healthz(&health),
            (StatusCode::INTERNAL_SERVER_ERROR, "unhealthy\n")
        );
    }
}
