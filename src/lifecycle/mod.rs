//! Runtime orchestration and lifecycle management.
//!
//! - [`CartSystem`] - hydrates the cart, runs its actor and shuts it down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use tracing::*;
