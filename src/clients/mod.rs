//! Type-safe wrappers around [`StateClient`](crate::framework::StateClient).

pub mod cart_client;

pub use cart_client::*;
