//! Shared cart state.
//!
//! The domain [`Cart`] stays a plain value; this module wraps it in a
//! reactive container created once at the app root and injected through
//! context, so components receive an explicit reference instead of reaching
//! for a global.

use leptos::prelude::*;
use velo_commerce::cart::{Cart, LineItem};
use velo_commerce::catalog::Product;
use velo_commerce::money::Money;

/// Reactive container around the cart.
#[derive(Debug, Clone, Copy)]
pub struct CartStore(RwSignal<Cart>);

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self(RwSignal::new(Cart::new()))
    }

    /// Add one unit of `product` to the cart.
    pub fn add(&self, product: &Product) {
        self.0.update(|cart| cart.add_item(product));
    }

    /// Total item count across line items. Reactive.
    pub fn item_count(&self) -> i64 {
        self.0.with(|cart| cart.item_count())
    }

    /// Total price across line items. Reactive.
    pub fn total_price(&self) -> Money {
        self.0.with(|cart| cart.total_price())
    }

    /// Snapshot of the current line items. Reactive.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.0.with(|cart| cart.items.clone())
    }

    /// Check if the cart is empty. Reactive.
    pub fn is_empty(&self) -> bool {
        self.0.with(|cart| cart.is_empty())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Register a fresh cart store on the current reactive owner.
pub fn provide_cart_store() -> CartStore {
    let store = CartStore::new();
    provide_context(store);
    store
}

/// Fetch the cart store injected by an ancestor.
pub fn use_cart_store() -> CartStore {
    expect_context::<CartStore>()
}
