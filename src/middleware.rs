//! Per-request tracing span.
//!
//! Every request runs inside an `info_span!("request")` with a fresh UUID v4
//! `request_id`. The dispatcher fills in the resolved `path` and the `route`
//! it chose (`crash`, `healthz`, `hello` or `bad_request`), so the completion
//! line shows what was served rather than the raw target.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Wrap a request in its span and log its status and latency on completion.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        target = %request.uri(),
        path = tracing::field::Empty,
        route = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(status = response.status().as_u16(), "Request completed");

        response
    }
    .instrument(span)
    .await
}
