//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. The
//! format is compact and hides the module prefix (`with_target(false)`); the level is
//! taken from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, shutdown, and the number of commands handled
//! - **Cart operations**: every command, with the resulting totals at `debug`
//! - **Persistence**: hydration at `info`, failed snapshot reads or writes at `warn`
//! - **Client calls**: one span per [`CartClient`](crate::clients::CartClient) method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every command and its payload
//! RUST_LOG=debug cargo run
//!
//! # Just the persistence layer
//! RUST_LOG=storefront_cart::engine=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Cart hydrated key="cart" items=0 total_count=0
//! INFO Serving cart key="cart" items=0
//! INFO Actor started state_type="CartEngine"
//! DEBUG add_to_cart: add_to_cart called id=101 product=Product { id: Numeric(101), .. }
//! DEBUG Command state_type="CartEngine" command=Add(..)
//! DEBUG Added to cart id=101 quantity=1
//! INFO checkout: Sending checkout to actor
//! INFO Checked out lines=1 total=10.0
//! INFO Cart cleared removed=1
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
