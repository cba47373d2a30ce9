//! Product data model.

use crate::ids::ProductId;
use crate::money::{self, Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Matches the record shape served by the catalog endpoint: `id`, `title`,
/// `description`, `image`, `price` (decimal), `rating` (0-5).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Full description; truncated for card display.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Unit price. Decimal on the wire, cents internally.
    #[serde(with = "money::decimal_usd")]
    pub price: Money,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
}

impl Product {
    /// Create a product from its field values.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            description: description.into(),
            image: image.into(),
            price: Money::from_decimal(price, Currency::USD),
            rating,
        }
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Number of filled stars in a 5-star row.
    pub fn star_count(&self) -> u8 {
        self.rating.round().clamp(0.0, 5.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_record() {
        let json = r#"{
            "id": 1,
            "title": "Red Shoe",
            "description": "Canvas sneaker",
            "image": "https://cdn.example/shoe.jpg",
            "price": 20,
            "rating": 4
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Red Shoe");
        assert_eq!(product.price, Money::new(2000, Currency::USD));
        assert_eq!(product.rating, 4.0);
    }

    #[test]
    fn test_deserialize_catalog_array() {
        let json = r#"[
            {"id": 1, "title": "A", "description": "", "image": "", "price": 1.5, "rating": 3.5},
            {"id": 2, "title": "B", "description": "", "image": "", "price": 2.5, "rating": 4.5}
        ]"#;

        let catalog: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].price, Money::new(250, Currency::USD));
    }

    #[test]
    fn test_price_display() {
        let product = Product::new(1, "Shoe", "", "", 20.0, 4.0);
        assert_eq!(product.price_display(), "$20.00");
    }

    #[test]
    fn test_star_count_rounds() {
        assert_eq!(Product::new(1, "A", "", "", 1.0, 4.4).star_count(), 4);
        assert_eq!(Product::new(1, "A", "", "", 1.0, 4.5).star_count(), 5);
        assert_eq!(Product::new(1, "A", "", "", 1.0, 0.0).star_count(), 0);
        assert_eq!(Product::new(1, "A", "", "", 1.0, 7.0).star_count(), 5);
    }
}
