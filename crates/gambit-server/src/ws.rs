//! # WebSocket Transport
//!
//! Bridges one socket to the session hub: assigns the connection id,
//! registers the outbox, forwards hub messages out, and feeds parsed
//! client frames in. Unparseable frames are answered locally with an
//! `invalidMove` and never reach the session task.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use gambit_core::ConnectionId;

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;

/// GET /ws — upgrade to the coordinator protocol.
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let id = ConnectionId::new();
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerMessage>();

    tracing::info!(conn = %id, "client connected");
    if state.handle.connect(id, out_tx.clone()).is_err() {
        return;
    }

    // Forward hub messages to the socket. Ends when the hub drops the
    // outbox (disconnect) or the socket send side fails.
    let mut forward = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, "failed to encode server message");
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Read loop: runs until the client closes or the transport errors.
    loop {
        tokio::select! {
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(ClientMessage::Move(payload)) => {
                                if state.handle.submit(id, payload).is_err() {
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!(conn = %id, error = %e, "unparseable frame");
                                let _ = out_tx.send(ServerMessage::InvalidMove {
                                    reason: "error processing move".into(),
                                });
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {} // ping/pong/binary: ignored
                    Some(Err(e)) => {
                        tracing::debug!(conn = %id, error = %e, "transport error");
                        break;
                    }
                }
            }
            _ = &mut forward => break,
        }
    }

    tracing::info!(conn = %id, "client disconnected");
    let _ = state.handle.disconnect(id);
    forward.abort();
}
