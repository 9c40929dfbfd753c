//! # Generic Messages
//!
//! Message types exchanged between a [`StateClient`](crate::framework::StateClient)
//! and its [`StateActor`](crate::framework::StateActor).

use crate::framework::error::FrameworkError;
use crate::framework::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// There are only two kinds of request: a `Command` that may mutate the state, and a
/// `Snapshot` that reads it. Both are queued on the same channel, so a snapshot always
/// observes every command sent before it.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Command {
        command: S::Command,
        respond_to: Response<S::Reply>,
    },
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
}
