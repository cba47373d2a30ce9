//! Sort keys for the product list.

use serde::{Deserialize, Serialize};

/// How the filtered product list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Price, low to high.
    #[default]
    Price,
    /// Rating, high to low.
    Rating,
}

impl SortKey {
    /// Stable string form, used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    /// Parse the string form back into a key.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortKey::Price),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    /// Human-readable label for the sort selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Price => "Sort by Price",
            SortKey::Rating => "Sort by Rating",
        }
    }
}
