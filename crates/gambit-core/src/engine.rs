//! # Rules Engine Seam
//!
//! The coordinator treats "is this action legal from this state" as an
//! opaque capability behind the [`RulesEngine`] trait. The engine owns the
//! game state; the session only ever asks it four things: whose turn it is,
//! apply this action, give me a snapshot, load this snapshot.
//!
//! The built-in [`relay::RelayEngine`] accepts any structurally sound move
//! and alternates the turn — enough to run the coordinator end to end.
//! Deployments with real rules plug their engine in through the trait.

pub mod relay;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::Side;

/// An opaque serialized game state, e.g. a FEN string.
///
/// Produced and consumed only by the engine; the coordinator forwards it
/// verbatim in `boardState` messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot(String);

impl StateSnapshot {
    pub fn new(blob: impl Into<String>) -> Self {
        Self(blob.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure at the engine seam.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The action was understood but is not a legal transition.
    #[error("illegal action: {0}")]
    Illegal(String),

    /// The payload could not be interpreted, or the engine failed
    /// internally. The session converts this to a malformed-action
    /// rejection — it never propagates further.
    #[error("malformed action: {0}")]
    Malformed(String),
}

/// The external rules collaborator.
///
/// Implementations must leave their state untouched when `apply_action`
/// returns an error.
pub trait RulesEngine: Send {
    /// The side authorized to submit the next action, derived from state.
    fn turn_owner(&self) -> Side;

    /// Validate and apply one action. On error the state is unchanged.
    fn apply_action(&mut self, payload: &serde_json::Value) -> Result<(), EngineError>;

    /// Serialize the current authoritative state.
    fn snapshot(&self) -> StateSnapshot;

    /// Replace the current state with a previously serialized one.
    fn load(&mut self, snapshot: &StateSnapshot) -> Result<(), EngineError>;
}
