//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Product fields are denormalized so the header preview renders without
/// going back to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product title.
    pub title: String,
    /// Product image URL.
    pub image: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always positive.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item for one unit of `product`.
    fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Line total: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// A quantity-aggregated shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, one per distinct product.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            currency: Currency::USD,
        }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line item for that product already exists its quantity goes up
    /// by 1; otherwise a new line item with quantity 1 is created.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::for_product(product));
        }
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total price (sum of line subtotals).
    pub fn total_price(&self) -> Money {
        Money::sum(self.items.iter().map(|i| i.subtotal()), self.currency)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get_item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
