//! # Session Registry and Move Application
//!
//! The single authoritative game instance: a boxed [`RulesEngine`] plus the
//! two-seat registry. There is no locking here — the server confines every
//! mutation to one actor task, so calls arrive strictly serialized.

use serde_json::Value;

use crate::engine::{EngineError, RulesEngine, StateSnapshot};
use crate::error::Reject;
use crate::gate;
use crate::identity::{ConnectionId, Role, Side};

/// A submitted state-transition request.
///
/// The payload is opaque to the coordinator; only the engine interprets it.
/// Lives for exactly one validate-apply-broadcast cycle.
#[derive(Debug, Clone)]
pub struct Action {
    pub payload: Value,
    pub submitted_by: ConnectionId,
}

/// Mapping of seat to occupant.
///
/// Invariants: at most one occupant per seat, at most one seat per
/// connection. Seats are reclaimed on disconnect, never transferred.
#[derive(Debug, Default)]
pub struct Seats {
    white: Option<ConnectionId>,
    black: Option<ConnectionId>,
}

impl Seats {
    pub fn new() -> Self {
        Self::default()
    }

    /// The connection occupying a seat, if any.
    pub fn occupant_of(&self, side: Side) -> Option<ConnectionId> {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    /// The seat a connection occupies, if any.
    pub fn side_of(&self, conn: ConnectionId) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.occupant_of(side) == Some(conn))
    }

    /// Seat a connection. Fails when the seat is occupied or the
    /// connection already holds the other seat.
    pub fn assign(&mut self, side: Side, conn: ConnectionId) -> bool {
        if self.occupant_of(side).is_some() || self.side_of(conn).is_some() {
            return false;
        }
        match side {
            Side::White => self.white = Some(conn),
            Side::Black => self.black = Some(conn),
        }
        true
    }

    /// Seat a connection at the first open seat, White before Black.
    pub fn claim_first_open(&mut self, conn: ConnectionId) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.assign(side, conn))
    }

    /// Vacate whichever seat the connection holds. No-op for spectators
    /// and unknown connections; returns the freed seat.
    pub fn vacate(&mut self, conn: ConnectionId) -> Option<Side> {
        let side = self.side_of(conn)?;
        match side {
            Side::White => self.white = None,
            Side::Black => self.black = None,
        }
        Some(side)
    }
}

/// The single authoritative game instance and its seat assignments.
///
/// Created once at process start and lives until shutdown. The current
/// turn owner is always derived from the engine, never cached here.
pub struct Session {
    engine: Box<dyn RulesEngine>,
    seats: Seats,
}

impl Session {
    pub fn new(engine: Box<dyn RulesEngine>) -> Self {
        Self {
            engine,
            seats: Seats::new(),
        }
    }

    /// Read-only snapshot of the authoritative state, for newcomers.
    pub fn current_snapshot(&self) -> StateSnapshot {
        self.engine.snapshot()
    }

    /// The side authorized to submit the next action.
    pub fn turn_owner(&self) -> Side {
        self.engine.turn_owner()
    }

    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// Assign a role to a newly connected party: first open seat in
    /// White-before-Black order, spectator once both are taken.
    pub fn connect(&mut self, conn: ConnectionId) -> Role {
        match self.seats.claim_first_open(conn) {
            Some(side) => Role::Seat(side),
            None => Role::Spectator,
        }
    }

    /// Vacate the connection's seat, if it held one. The session itself
    /// survives; the freed seat goes to the next new connection.
    pub fn disconnect(&mut self, conn: ConnectionId) -> Option<Side> {
        self.seats.vacate(conn)
    }

    /// Run one authorize-apply cycle.
    ///
    /// On success the engine state has advanced and the fresh snapshot is
    /// returned for broadcast. On any rejection the state is untouched and
    /// only the submitter learns of the failure.
    pub fn apply(&mut self, action: &Action) -> Result<StateSnapshot, Reject> {
        gate::authorize(self, action.submitted_by)?;
        self.engine
            .apply_action(&action.payload)
            .map_err(|e| match e {
                EngineError::Illegal(_) => Reject::IllegalAction,
                EngineError::Malformed(_) => Reject::MalformedAction,
            })?;
        Ok(self.engine.snapshot())
    }
}
