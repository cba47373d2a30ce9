//! E-commerce domain types and logic for VeloShop.
//!
//! This crate holds everything the storefront knows about commerce,
//! independent of how it is rendered or where the data comes from:
//!
//! - **Catalog**: the product list as fetched from the remote source
//! - **Cart**: quantity-aggregated line items with derived totals
//! - **Search**: the filter/sort/paginate pipeline over the in-memory catalog
//!
//! # Example
//!
//! ```rust
//! use velo_commerce::prelude::*;
//!
//! let catalog = vec![
//!     Product::new(1, "Red Shoe", "Canvas sneaker", "/img/shoe.jpg", 20.0, 4.0),
//!     Product::new(2, "Blue Hat", "Wool beanie", "/img/hat.jpg", 10.0, 5.0),
//! ];
//!
//! let mut state = DisplayState::new();
//! state.set_search_term("red");
//! let displayed = select(&catalog, &state);
//! assert_eq!(displayed.len(), 1);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&displayed[0]);
//! cart.add_item(&displayed[0]);
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem};
    pub use crate::catalog::Product;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::search::{matching_count, select, DisplayState, SortKey, PAGE_SIZE};
}
