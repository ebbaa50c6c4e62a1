//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the session model. A [`ConnectionId`] is a
//! distinct type — you cannot pass a raw UUID where a connection identity is
//! expected. [`Side`] and [`Role`] carry their lowercase wire names via
//! serde so the server crate never stringifies them by hand.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for one transport connection.
///
/// Assigned when the transport accepts the connection and never reused for
/// its lifetime. Always valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Create a new random connection identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a connection identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ConnectionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ConnectionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// One of the two exclusive active-participant seats.
///
/// Seat claim order is fixed: [`Side::White`] before [`Side::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, in seat-claim order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Lowercase wire name, matching the `playerRole` payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role a connection was assigned at connect time.
///
/// Assigned exactly once; a connection never changes role for its lifetime.
/// A later connection cannot take a seat from an existing one — vacated
/// seats go only to subsequent *new* connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Seat(Side),
    Spectator,
}

impl Role {
    /// Whether this role holds a seat.
    pub fn is_seated(self) -> bool {
        matches!(self, Role::Seat(_))
    }

    /// The seat side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Role::Seat(side) => Some(side),
            Role::Spectator => None,
        }
    }
}
