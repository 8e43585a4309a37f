//! healthz-server: a minimal HTTP service for orchestrated deployments.
//!
//! Serves a greeting, a health check backed by a one-way health flag, and a
//! debug endpoint that terminates the process. On SIGTERM/SIGINT the health
//! flag flips to unhealthy before the server drains in-flight connections,
//! so an orchestrator polling `/healthz` stops routing traffic first.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ServerError, TargetError};
pub use health::HealthState;
pub use state::{AppState, ExitHook};
