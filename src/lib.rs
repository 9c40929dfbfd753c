#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront Cart
//!
//! > **The shopping cart of a storefront, persisted write-through to a session store.**
//!
//! The cart is an ordered list of line items, one per product, each with a quantity of
//! at least one. Totals are derived on every read. Every change is mirrored to a
//! [`SessionStore`](session::SessionStore) so that reopening the session finds the same
//! cart, and a missing or unreadable snapshot simply yields an empty cart.
//!
//! ## 🏗️ Design
//!
//! ### 1. A synchronous core
//! [`CartEngine`](engine::CartEngine) owns the [`CartState`](model::CartState) and the
//! store handle. Its operations cannot fail: store errors are logged and the in-memory
//! cart stays authoritative for the rest of the session.
//!
//! ### 2. One writer
//! To share a cart between tasks the engine is hosted by a generic
//! [`StateActor`](framework::StateActor). Commands are applied one at a time, and the
//! snapshot write happens inside the handler, so no two mutations interleave.
//!
//! ### 3. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum (`SessionStoreError`, `CodecError`,
//! `CartError`, ...). Only the trip to the actor can fail from a caller's point of view.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - products, cart items, the cart state and order drafts.
//! - [`codec`] - the JSON snapshot format and fail-open hydration.
//! - [`session`] - the Session Store trait with in-memory and file backends.
//! - [`engine`] - the write-through cart.
//! - [`framework`] - the generic single-writer actor, its client and mocks.
//! - [`cart_actor`] / [`clients`] - the cart behind the actor and its typed client.
//! - [`catalog`] - where products come from, and the category filter.
//! - [`config`] / [`lifecycle`] - environment configuration, startup and shutdown.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Keep the cart between runs
//! CART_SESSION_DIR=/tmp/storefront RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod codec;
pub mod config;
pub mod engine;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod session;
