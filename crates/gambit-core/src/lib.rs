//! # gambit-core — Turn-Gated Session Core
//!
//! The transport-free heart of the gambit coordinator: exactly one
//! authoritative game state, exactly one writer per turn, deterministic
//! seat reclamation. Everything here is synchronous and owns no I/O —
//! the server crate serializes all calls through a single actor task.
//!
//! ## Modules
//!
//! - [`identity`] — connection ids, sides, roles
//! - [`engine`] — the [`RulesEngine`] seam plus the built-in relay engine
//! - [`session`] — seat registry and move application
//! - [`gate`] — turn-ownership authorization
//! - [`error`] — the three-way rejection taxonomy
//!
//! ## Invariants
//!
//! - At most one connection occupies each seat; a connection occupies at
//!   most one seat.
//! - The current turn owner is always derived from engine state, never
//!   stored alongside it.
//! - A rejected action leaves the engine state untouched.

pub mod engine;
pub mod error;
pub mod gate;
pub mod identity;
pub mod session;

pub use engine::{EngineError, RulesEngine, StateSnapshot};
pub use error::Reject;
pub use identity::{ConnectionId, Role, Side};
pub use session::{Action, Seats, Session};
