//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener on all interfaces
//! - Health flag flip followed by connection draining on SIGTERM/SIGINT

mod server;
pub mod shutdown;

pub use server::{serve, start_server};
