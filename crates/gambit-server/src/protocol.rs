//! # Wire Protocol
//!
//! JSON text frames with a `{"type": ..., "data": ...}` envelope. Event
//! names are the coordinator's public contract: `playerRole`,
//! `spectatorRole`, `move`, `boardState`, `invalidMove`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use gambit_core::Side;

/// Server-to-client messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Seat assignment for one of the first two parties.
    PlayerRole(Side),
    /// Read-only role for everyone after the seats fill.
    SpectatorRole,
    /// Broadcast echo of an accepted action, submitter included.
    Move(Value),
    /// Full authoritative state: broadcast after each accepted action and
    /// sent once to every newcomer.
    BoardState(String),
    /// Rejection, delivered to the submitter only.
    InvalidMove { reason: String },
}

/// Client-to-server messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    /// A proposed action in the engine's encoding, e.g.
    /// `{"from": "e2", "to": "e4", "promotion": "q"}`.
    Move(Value),
}
