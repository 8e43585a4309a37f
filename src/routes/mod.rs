//! HTTP request dispatch.
//!
//! Every request lands on a single fallback dispatcher. It resolves the
//! request target into a normalized path, then picks a handler by exact,
//! case-sensitive comparison of method and path. Query strings are ignored
//! and trailing slashes are significant.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod crash;
pub mod health;
pub mod home;
pub mod target;

use axum::{
    extract::State,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use http::{header::HOST, HeaderMap, Method, Uri};

use crate::config::{CRASH_PATH, HEALTH_PATH};
use crate::middleware::request_span_layer;
use crate::state::AppState;

pub use target::resolve_path;

/// Creates the Axum router: one dispatcher, wrapped in request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        // Request span middleware - request_id, resolved path and route for every request
        .layer(middleware::from_fn(request_span_layer))
}

/// Which handler a request was dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Crash,
    Health,
    Hello,
}

impl Route {
    /// Pick the handler for a method and resolved path. Matching is exact.
    pub fn classify(method: &Method, path: &str) -> Self {
        if *method != Method::GET {
            return Route::Hello;
        }
        match path {
            CRASH_PATH => Route::Crash,
            HEALTH_PATH => Route::Health,
            _ => Route::Hello,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Crash => "crash",
            Route::Health => "healthz",
            Route::Hello => "hello",
        }
    }
}

/// Routes a request to the crash, health or greeting handler.
///
/// The resolved path and chosen route are recorded on the current request span.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let host = headers.get(HOST).and_then(|value| value.to_str().ok());
    let span = tracing::Span::current();

    let path = match resolve_path(host, &uri) {
        Ok(path) => path,
        Err(e) => {
            span.record("route", "bad_request");
            return e.into_response();
        }
    };

    let route = Route::classify(&method, &path);
    span.record("path", path.as_str());
    span.record("route", route.as_str());

    match route {
        Route::Crash => crash::crash(&state).into_response(),
        Route::Health => health::healthz(&state.health).into_response(),
        Route::Hello => home::hello().into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_get_routes() {
        assert_eq!(Route::classify(&Method::GET, "/crash"), Route::Crash);
        assert_eq!(Route::classify(&Method::GET, "/healthz"), Route::Health);
        assert_eq!(Route::classify(&Method::GET, "/"), Route::Hello);
    }

    #[test]
    fn test_classify_is_exact() {
        assert_eq!(Route::classify(&Method::GET, "/healthz/"), Route::Hello);
        assert_eq!(Route::classify(&Method::GET, "/Crash"), Route::Hello);
    }

    #[test]
    fn test_classify_other_methods_say_hello() {
        assert_eq!(Route::classify(&Method::POST, "/crash"), Route::Hello);
        assert_eq!(Route::classify(&Method::HEAD, "/healthz"), Route::Hello);
    }
}
