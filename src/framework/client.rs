//! # Generic Client
//!
//! This module defines the generic client for communicating with a
//! [`StateActor`](crate::framework::StateActor).

use crate::framework::error::FrameworkError;
use crate::framework::message::StateRequest;
use crate::framework::state::ActorState;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StateActor`.
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive.
/// * **Async API** - every call resolves to `Result<_, FrameworkError>`.
/// * **Ordered** - requests from one caller are applied in the order they are sent.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>) -> Self {
        Self { sender }
    }

    /// Send a command and wait for the actor to apply it.
    pub async fn send(&self, command: S::Command) -> Result<S::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Read the current state.
    pub async fn snapshot(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Whether the actor has stopped accepting requests.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
