//! Default greeting for every request not handled elsewhere.

use axum::http::StatusCode;

/// Greeting body
pub const HELLO_BODY: &str = "hello\n";

pub fn hello() -> (StatusCode, &'static str) {
    (StatusCode::OK, HELLO_BODY)
}
