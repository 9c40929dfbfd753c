//! # ActorState Trait
//!
//! The `ActorState` trait defines the contract that a piece of mutable state must
//! implement to be hosted by the generic [`StateActor`](crate::framework::StateActor).
//!
//! # Architecture Note
//! The actor owns exactly one value of the state type. Every mutation arrives as a
//! `Command`, and every read is served from a `Snapshot`. Because the actor processes
//! one message at a time, a command runs to completion (including any side effects it
//! performs, such as writing to a store) before the next one starts.
//!
//! # Provided Methods (Hooks)
//! - [`ActorState::on_start`] runs once before the first message.
//! - [`ActorState::on_stop`] runs once after the last client is dropped.
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any state must implement to be hosted by `StateActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await (e.g., calling other actors).
/// The `Context` type is injected into every hook by
/// [`StateActor::run`](crate::framework::StateActor::run), which allows dependencies
/// to be bound late rather than at construction time.
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Mutating operation accepted by the actor.
    type Command: Send + Debug;

    /// Result of a successfully applied command.
    type Reply: Send + Debug;

    /// Read-only view handed out to callers.
    type Snapshot: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    /// Use [`std::convert::Infallible`] when commands cannot fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the message loop starts.
    /// An error here stops the actor before it accepts any request.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one command to the state.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;

    /// Build the read-only view of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Called once after the channel closes.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}
}
