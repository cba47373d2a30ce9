//! JSON-LD product markup.

use serde::Serialize;
use velo_commerce::catalog::Product;

/// JSON-LD context for the emitted vocabulary.
const SCHEMA_CONTEXT: &str = "https://schema.org";

/// schema.org `Product` markup for one catalog item.
///
/// Serializes to the payload of a
/// `<script type="application/ld+json">` block.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub image: String,
    pub offers: Offer,
    #[serde(rename = "aggregateRating")]
    pub aggregate_rating: AggregateRating,
}

/// schema.org `Offer`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub price: f64,
    #[serde(rename = "priceCurrency")]
    pub price_currency: String,
}

/// schema.org `AggregateRating`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "ratingValue")]
    pub rating_value: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

impl ProductJsonLd {
    /// Build the markup for `product`.
    ///
    /// The catalog carries a single average rating per product, so the
    /// aggregate rating is emitted with a review count of 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            schema_type: "Product",
            name: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            offers: Offer {
                schema_type: "Offer",
                price: product.price.to_decimal(),
                price_currency: product.price.currency.code().to_string(),
            },
            aggregate_rating: AggregateRating {
                schema_type: "AggregateRating",
                rating_value: product.rating,
                review_count: 1,
            },
        }
    }

    /// Serialize to the JSON payload of the script block.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> Product {
        Product::new(
            1,
            "Red Shoe",
            "Canvas sneaker",
            "https://cdn.example/shoe.jpg",
            20.0,
            4.0,
        )
    }

    #[test]
    fn test_markup_shape() {
        let markup = ProductJsonLd::from_product(&shoe());
        let value: serde_json::Value = serde_json::from_str(&markup.to_json()).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Product");
        assert_eq!(value["name"], "Red Shoe");
        assert_eq!(value["description"], "Canvas sneaker");
        assert_eq!(value["image"], "https://cdn.example/shoe.jpg");

        assert_eq!(value["offers"]["@type"], "Offer");
        assert_eq!(value["offers"]["price"], 20.0);
        assert_eq!(value["offers"]["priceCurrency"], "USD");

        assert_eq!(value["aggregateRating"]["@type"], "AggregateRating");
        assert_eq!(value["aggregateRating"]["ratingValue"], 4.0);
        assert_eq!(value["aggregateRating"]["reviewCount"], 1);
    }

    #[test]
    fn test_markup_carries_cents_precision() {
        let product = Product::new(2, "Blue Hat", "", "", 10.99, 5.0);
        let markup = ProductJsonLd::from_product(&product);
        assert!((markup.offers.price - 10.99).abs() < 1e-9);
    }
}
