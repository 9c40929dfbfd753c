//! Generic single-writer actor framework.
//!
//! This module provides the building blocks for hosting one piece of mutable state
//! behind a Tokio task, so that any number of callers can share it without locks.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that a state type implements to be hosted by an actor
//! - [`StateActor`] - Generic actor that owns the state and runs the message loop
//! - [`StateClient`] - Cloneable, type-safe handle for sending commands and reading snapshots
//! - [`ActorClient`] - Trait for domain-specific client wrappers
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
