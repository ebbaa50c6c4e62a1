//! # Application State
//!
//! Shared state for the Axum application: the handle to the one session
//! task. Clone-cheap; every connection handler gets its own copy.

use crate::hub::SessionHandle;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the session actor owning the authoritative game.
    pub handle: SessionHandle,
}

impl AppState {
    pub fn new(handle: SessionHandle) -> Self {
        Self { handle }
    }
}
