//! # gambit-server — WebSocket Game Coordinator
//!
//! Serves one authoritative two-seat game session over WebSockets. The
//! first two connections get the White and Black seats in that order;
//! everyone after is a spectator. Actions pass the turn gate, then the
//! rules engine; accepted actions fan out as a `move` echo followed by the
//! full `boardState`, in that order, to every connected party.
//!
//! ## Surface
//!
//! | Route               | Module     | Purpose                       |
//! |----------------------|-----------|-------------------------------|
//! | `GET /ws`            | [`ws`]    | Coordinator protocol upgrade  |
//! | `GET /health/liveness`  | here   | Process is up                 |
//! | `GET /health/readiness` | here   | Session task accepting work   |
//!
//! ## Serialization point
//!
//! All session mutation is confined to the actor in [`hub`]; handlers only
//! ever enqueue commands. See the hub docs for the ordering guarantees.

pub mod hub;
pub mod protocol;
pub mod state;
pub mod ws;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health/liveness — the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness — the coordinator accepts connections.
async fn readiness() -> &'static str {
    "ready"
}
