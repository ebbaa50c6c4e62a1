//! Property tests over arbitrary connect/disconnect interleavings.
//!
//! Whatever order parties come and go, the seat registry must never seat
//! two connections on one side, never seat one connection on both sides,
//! and must hand a vacated seat to the next new connection, White first.

use proptest::prelude::*;

use gambit_core::engine::relay::RelayEngine;
use gambit_core::{ConnectionId, Role, Session, Side};

/// One step of a simulated lobby: connect a fresh party or disconnect an
/// earlier one (index into the connect log, modulo its length).
#[derive(Debug, Clone)]
enum Step {
    Connect,
    Disconnect(usize),
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(Step::Connect),
            2 => (0usize..64).prop_map(Step::Disconnect),
        ],
        1..64,
    )
}

proptest! {
    #[test]
    fn seats_stay_exclusive_under_any_interleaving(script in steps()) {
        let mut session = Session::new(Box::new(RelayEngine::new()));
        let mut connected: Vec<ConnectionId> = Vec::new();

        for step in script {
            match step {
                Step::Connect => {
                    let conn = ConnectionId::new();
                    let role = session.connect(conn);
                    // A seat is granted exactly when one was open, and the
                    // open seat order is White before Black.
                    let white = session.seats().occupant_of(Side::White);
                    let black = session.seats().occupant_of(Side::Black);
                    match role {
                        Role::Seat(side) => {
                            prop_assert_eq!(session.seats().occupant_of(side), Some(conn));
                            if side == Side::Black {
                                prop_assert!(white.is_some());
                            }
                        }
                        Role::Spectator => {
                            prop_assert!(white.is_some() && black.is_some());
                        }
                    }
                    connected.push(conn);
                }
                Step::Disconnect(i) => {
                    if connected.is_empty() {
                        continue;
                    }
                    let conn = connected.remove(i % connected.len());
                    let vacated = session.disconnect(conn);
                    if let Some(side) = vacated {
                        prop_assert_eq!(session.seats().occupant_of(side), None);
                    }
                    prop_assert_eq!(session.seats().side_of(conn), None);
                }
            }

            // Core invariant: the two seats never share an occupant.
            let white = session.seats().occupant_of(Side::White);
            let black = session.seats().occupant_of(Side::Black);
            if let (Some(w), Some(b)) = (white, black) {
                prop_assert_ne!(w, b);
            }
        }
    }
}
