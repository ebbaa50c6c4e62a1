//! # Relay Engine
//!
//! A rules engine that enforces structure, not chess. It accepts any move
//! of the form `{from, to, promotion?}` whose squares are well-formed
//! board coordinates, alternates the turn, and snapshots the move log.
//! White moves first.

use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, RulesEngine, StateSnapshot};
use crate::identity::Side;

/// One parsed move payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMove {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

/// Serialized form of the relay engine's state.
#[derive(Debug, Serialize, Deserialize)]
struct RelayState {
    turn: Side,
    moves: Vec<RelayMove>,
}

/// Structure-only engine: any well-formed move is legal.
#[derive(Debug)]
pub struct RelayEngine {
    turn: Side,
    moves: Vec<RelayMove>,
}

impl RelayEngine {
    pub fn new() -> Self {
        Self {
            turn: Side::White,
            moves: Vec::new(),
        }
    }

    /// The accepted moves so far, in order.
    pub fn moves(&self) -> &[RelayMove] {
        &self.moves
    }

    fn check_square(square: &str) -> Result<(), EngineError> {
        let mut chars = square.chars();
        let ok = matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some('a'..='h'), Some('1'..='8'), None)
        );
        if ok {
            Ok(())
        } else {
            Err(EngineError::Illegal(format!("bad square: {square:?}")))
        }
    }
}

impl Default for RelayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for RelayEngine {
    fn turn_owner(&self) -> Side {
        self.turn
    }

    fn apply_action(&mut self, payload: &serde_json::Value) -> Result<(), EngineError> {
        let mv: RelayMove = serde_json::from_value(payload.clone())
            .map_err(|e| EngineError::Malformed(e.to_string()))?;
        Self::check_square(&mv.from)?;
        Self::check_square(&mv.to)?;
        if mv.from == mv.to {
            return Err(EngineError::Illegal("move must change square".into()));
        }
        self.moves.push(mv);
        self.turn = self.turn.other();
        Ok(())
    }

    fn snapshot(&self) -> StateSnapshot {
        let state = RelayState {
            turn: self.turn,
            moves: self.moves.clone(),
        };
        // Serializing a struct of plain fields cannot fail.
        StateSnapshot::new(serde_json::to_string(&state).unwrap_or_default())
    }

    fn load(&mut self, snapshot: &StateSnapshot) -> Result<(), EngineError> {
        let state: RelayState = serde_json::from_str(snapshot.as_str())
            .map_err(|e| EngineError::Malformed(format!("bad snapshot: {e}")))?;
        self.turn = state.turn;
        self.moves = state.moves;
        Ok(())
    }
}
