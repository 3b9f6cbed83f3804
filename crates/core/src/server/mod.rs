//! HTTP server for the prompt API
//!
//! `router` wires the handlers to a store. `start` binds a listener and runs
//! the router on a background task until its `ServerHandle` is stopped or
//! dropped.

pub mod error;
pub mod routes;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, errors::Result, store::PromptStore};

/// Store shared by every request handler
pub type SharedStore = Arc<dyn PromptStore>;

/// Build the API router around `store`
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/prompts", get(routes::all_prompts))
        .route("/api/prompts/random", get(routes::random_prompt))
        .route("/api/prompts/category/:category", get(routes::prompts_by_category))
        .route("/health", get(routes::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Server handle for lifecycle management
pub struct ServerHandle {
    local_addr:  SocketAddr,
    shutdown:    Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Bind to the configured address and serve `store` in the background
///
/// Port 0 binds a random free port; see `ServerHandle::local_addr`.
pub async fn start(config: &ServerConfig, store: SharedStore) -> Result<ServerHandle> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    let local_addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = router(store);

    let join_handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;

        match result {
            Ok(()) => tracing::info!("Prompt server stopped"),
            Err(e) => tracing::error!("Prompt server error: {}", e),
        }
    });

    tracing::info!("Prompt server listening on http://{}", local_addr);

    Ok(ServerHandle {
        local_addr,
        shutdown: Some(shutdown_tx),
        join_handle: Some(join_handle),
    })
}
