//! HTTP server startup logic.

use std::net::SocketAddr;

use axum_server::Handle;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::create_router;
use crate::state::AppState;

use super::shutdown;

/// Start the HTTP server and register the shutdown listener.
///
/// This function blocks until the server has drained after a termination signal.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone(), state.health.clone());

    serve(config.addr(), state, handle).await
}

/// Serve the dispatcher on `addr` until `handle` is shut down.
///
/// The bound address is logged once the listener is up; with port 0 it is
/// also available through [`Handle::listening`].
pub async fn serve(addr: SocketAddr, state: AppState, handle: Handle) -> Result<(), ServerError> {
    let app = create_router(state);

    let announce = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = announce.listening().await {
            tracing::info!(%bound, "listening on http://{}", bound);
        }
    });

    let outcome = axum_server::bind(addr)
        .handle(handle.clone())
        .serve(app.into_make_service())
        .await;

    if let Err(e) = outcome {
        // A server that never reported a listening address failed to bind
        return Err(match handle.listening().await {
            None => ServerError::Bind(e),
            Some(_) => ServerError::Server(e.to_string()),
        });
    }

    tracing::info!("Server stopped, all connections drained");
    Ok(())
}
