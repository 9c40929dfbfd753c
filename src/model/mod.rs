//! Pure data structures: catalog products, cart contents, and order drafts.
//!
//! Nothing in this module performs I/O. The cart mutations on [`CartState`] are the
//! reducer half of the cart engine; persistence is layered on top by
//! [`engine`](crate::engine).

pub mod cart;
pub mod order;
mod price;
pub mod product;

pub use cart::*;
pub use order::*;
pub use product::*;
