//! Shopping cart module.
//!
//! The cart in scope is add-only: repeated adds aggregate into line-item
//! quantities, and the header reads derived totals. There is no removal or
//! quantity-decrement operation.

mod cart;

pub use cart::{Cart, LineItem};
