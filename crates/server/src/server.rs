use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{advice, entries};
use advisor::Advisor;
use engine::Engine;

/// Request-scoped handles, cloned into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub advisor: Advisor,
}

impl ServerState {
    pub fn new(engine: Engine, advisor: Advisor) -> Self {
        Self {
            engine: Arc::new(engine),
            advisor,
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(entries::list))
        .route("/entries", get(entries::list_json))
        .route("/submit/", post(entries::submit))
        .route("/delete/{id}", post(entries::delete))
        .route("/clear_all/", post(entries::clear))
        .route("/get_all_advice/", get(advice::get_all))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
