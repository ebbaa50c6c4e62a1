//! # Turn Gate
//!
//! Pure seat/identity comparison: the only connection allowed to submit an
//! action is the one occupying the seat the engine says owns the turn. The
//! gate never looks inside the action — legality is the engine's job.

use crate::error::Reject;
use crate::identity::{ConnectionId, Side};
use crate::session::Session;

/// Authorize a submitter against the current turn owner.
///
/// Returns the turn-owner side on success. Rejects `NotYourTurn` when the
/// submitter holds the wrong seat, no seat, or the turn-owner seat is
/// vacant (an empty seat has no authorized writer).
pub fn authorize(session: &Session, submitter: ConnectionId) -> Result<Side, Reject> {
    let owner = session.turn_owner();
    match session.seats().occupant_of(owner) {
        Some(expected) if expected == submitter => Ok(owner),
        _ => Err(Reject::NotYourTurn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::relay::RelayEngine;

    fn seated_session() -> (Session, ConnectionId, ConnectionId) {
        let mut s = Session::new(Box::new(RelayEngine::new()));
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        s.connect(a);
        s.connect(b);
        (s, a, b)
    }

    #[test]
    fn turn_owner_occupant_is_authorized() {
        let (s, a, _) = seated_session();
        assert_eq!(authorize(&s, a), Ok(Side::White));
    }

    #[test]
    fn other_seat_is_rejected() {
        let (s, _, b) = seated_session();
        assert_eq!(authorize(&s, b), Err(Reject::NotYourTurn));
    }

    #[test]
    fn unknown_connection_is_rejected() {
        let (s, _, _) = seated_session();
        assert_eq!(authorize(&s, ConnectionId::new()), Err(Reject::NotYourTurn));
    }

    #[test]
    fn vacant_owner_seat_rejects_all() {
        let (mut s, a, b) = seated_session();
        s.disconnect(a);
        assert_eq!(authorize(&s, b), Err(Reject::NotYourTurn));
        assert_eq!(authorize(&s, a), Err(Reject::NotYourTurn));
    }
}
