//! # Session Hub
//!
//! The single-writer actor around the [`Session`]. One tokio task owns the
//! session and the registry of per-connection outboxes; every connect,
//! submission, and disconnect flows through one mpsc queue and runs to
//! completion before the next is touched. Two in-flight submissions can
//! therefore never both pass the turn gate against a stale turn owner, and
//! the `move`-then-`boardState` broadcast pair of one action never
//! interleaves with another's.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

use gambit_core::{Action, ConnectionId, Role, RulesEngine, Session};

use crate::protocol::ServerMessage;

/// Per-connection channel for server-to-client messages.
pub type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// Commands accepted by the session task.
#[derive(Debug)]
enum Command {
    Connect { id: ConnectionId, outbox: Outbox },
    Submit { id: ConnectionId, payload: Value },
    Disconnect { id: ConnectionId },
}

/// The session task has shut down and can no longer accept commands.
#[derive(Error, Debug)]
#[error("session task is gone")]
pub struct HubClosed;

/// Cheap-to-clone handle used by every connection handler.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl SessionHandle {
    /// Register a connection and its outbox. The task replies with a role
    /// message and a state snapshot through the outbox.
    pub fn connect(&self, id: ConnectionId, outbox: Outbox) -> Result<(), HubClosed> {
        self.tx
            .send(Command::Connect { id, outbox })
            .map_err(|_| HubClosed)
    }

    /// Submit an action payload on behalf of a connection.
    pub fn submit(&self, id: ConnectionId, payload: Value) -> Result<(), HubClosed> {
        self.tx
            .send(Command::Submit { id, payload })
            .map_err(|_| HubClosed)
    }

    /// Vacate the connection's seat (if any) and drop its outbox.
    pub fn disconnect(&self, id: ConnectionId) -> Result<(), HubClosed> {
        self.tx.send(Command::Disconnect { id }).map_err(|_| HubClosed)
    }
}

/// Spawn the session task for one game and return its handle.
///
/// The task runs until every handle is dropped; the session (and with it
/// the game) lives for the whole process, matching the one-session model.
pub fn spawn(engine: Box<dyn RulesEngine>) -> SessionHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let session = Session::new(engine);
    tokio::spawn(run(session, rx));
    SessionHandle { tx }
}

async fn run(mut session: Session, mut rx: mpsc::UnboundedReceiver<Command>) {
    let mut outboxes: HashMap<ConnectionId, Outbox> = HashMap::new();

    while let Some(command) = rx.recv().await {
        match command {
            Command::Connect { id, outbox } => {
                let role = session.connect(id);
                let role_msg = match role {
                    Role::Seat(side) => {
                        tracing::info!(conn = %id, side = %side, "seat assigned");
                        ServerMessage::PlayerRole(side)
                    }
                    Role::Spectator => {
                        tracing::info!(conn = %id, "spectator joined");
                        ServerMessage::SpectatorRole
                    }
                };
                let snapshot = session.current_snapshot();
                let _ = outbox.send(role_msg);
                let _ = outbox.send(ServerMessage::BoardState(snapshot.as_str().to_owned()));
                outboxes.insert(id, outbox);
            }
            Command::Submit { id, payload } => {
                let action = Action {
                    payload,
                    submitted_by: id,
                };
                match session.apply(&action) {
                    Ok(snapshot) => {
                        tracing::debug!(conn = %id, turn = %session.turn_owner(), "action accepted");
                        broadcast(&outboxes, ServerMessage::Move(action.payload));
                        broadcast(
                            &outboxes,
                            ServerMessage::BoardState(snapshot.as_str().to_owned()),
                        );
                    }
                    Err(reject) => {
                        tracing::warn!(conn = %id, code = reject.code(), "action rejected");
                        if let Some(outbox) = outboxes.get(&id) {
                            let _ = outbox.send(ServerMessage::InvalidMove {
                                reason: reject.to_string(),
                            });
                        }
                    }
                }
            }
            Command::Disconnect { id } => {
                if let Some(side) = session.disconnect(id) {
                    tracing::info!(conn = %id, side = %side, "seat vacated");
                } else {
                    tracing::info!(conn = %id, "spectator left");
                }
                outboxes.remove(&id);
            }
        }
    }
}

fn broadcast(outboxes: &HashMap<ConnectionId, Outbox>, msg: ServerMessage) {
    for (id, outbox) in outboxes {
        if outbox.send(msg.clone()).is_err() {
            // Receiver already dropped; the disconnect command that follows
            // the transport close will clean up the seat and the entry.
            tracing::debug!(conn = %id, "dropping broadcast to closed outbox");
        }
    }
}
