//! Error types for the cart actor.

use thiserror::Error;

/// Errors seen by callers of the cart actor.
///
/// Cart operations themselves cannot fail; only the trip to and from the actor can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor answered a command with a reply meant for another command.
    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
