//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the "server" half of the actor model. It owns
//! one value of an [`ActorState`] type and processes messages sequentially, which gives
//! every command exclusive access to the state without any locking.

use crate::framework::client::StateClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::StateRequest;
use crate::framework::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single state value.
///
/// **Concurrency Model**:
/// Commands from every clone of the client land on one bounded channel and are
/// applied in arrival order. A command never interleaves with another one, so any
/// side effect performed inside [`ActorState::handle_command`] happens inside the
/// critical section.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use storefront_cart::framework::{ActorState, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)]
/// struct Counter(u64);
///
/// #[async_trait]
/// impl ActorState for Counter {
///     type Command = u64;
///     type Reply = u64;
///     type Snapshot = u64;
///     type Context = ();
///     type Error = std::convert::Infallible;
///
///     async fn handle_command(&mut self, by: u64, _: &()) -> Result<u64, Self::Error> {
///         self.0 += by;
///         Ok(self.0)
///     }
///
///     fn snapshot(&self) -> u64 {
///         self.0
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Counter::default(), 10);
///     tokio::spawn(actor.run(()));
///
///     client.send(2).await.unwrap();
///     assert_eq!(client.snapshot().await.unwrap(), 2);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel; when it is full, client calls
    /// wait until there is space. A capacity of zero is raised to one.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every hook of the state.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "CartEngine" instead of the full path)
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(state_type, error = %e, "on_start failed");
            return;
        }
        info!(state_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(state_type, ?command, "Command");
                    let result = self
                        .state
                        .handle_command(command, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    handled += 1;
                    match &result {
                        Ok(reply) => debug!(state_type, ?reply, "Command ok"),
                        Err(e) => warn!(state_type, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        self.state.on_stop(&context).await;
        info!(state_type, handled, "Shutdown");
    }
}
