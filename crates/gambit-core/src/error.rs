//! # Rejection Taxonomy
//!
//! Every way a submitted action can fail, and nothing else. All three are
//! recoverable and local: they are reported only to the submitting
//! connection, session state is left unchanged, and the process never
//! terminates because of one.

use thiserror::Error;

/// Why a submitted action was rejected.
///
/// The `Display` text is the human-readable reason delivered to the
/// submitter in the `invalidMove` message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reject {
    /// The submitter does not occupy the seat whose turn it is.
    #[error("it's not your turn")]
    NotYourTurn,

    /// The rules engine understood the action but it is not a legal
    /// transition from the current state.
    #[error("invalid move")]
    IllegalAction,

    /// The action payload could not be interpreted by the rules engine.
    #[error("error processing move")]
    MalformedAction,
}

impl Reject {
    /// Machine-readable code for logs and structured clients.
    pub fn code(&self) -> &'static str {
        match self {
            Reject::NotYourTurn => "NOT_YOUR_TURN",
            Reject::IllegalAction => "ILLEGAL_ACTION",
            Reject::MalformedAction => "MALFORMED_ACTION",
        }
    }
}
