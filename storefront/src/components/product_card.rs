//! Product card.

use leptos::prelude::*;
use velo_commerce::catalog::Product;

use crate::cart_store::use_cart_store;
use crate::components::JsonLd;

/// Longest description shown on a card before cutting to an ellipsis.
const DESCRIPTION_LIMIT: usize = 100;

/// Cut `text` to at most `max_chars` characters on a char boundary,
/// appending an ellipsis when something was dropped.
fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// One product in the grid: image, title, description, rating, price, and
/// the add-to-cart button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart_store();

    let stars = product.star_count();
    let description = truncate_description(&product.description, DESCRIPTION_LIMIT);
    let price = product.price_display();
    let rating_label = format!("({})", product.rating);
    let for_cart = product.clone();

    view! {
        <div class="product-card">
            <JsonLd product=product.clone()/>
            <img class="product-image" src=product.image.clone() alt=product.title.clone()/>
            <div class="product-body">
                <h3 class="product-title">{product.title.clone()}</h3>
                <p class="product-description">{description}</p>
                <div class="product-rating">
                    {(0..5u8)
                        .map(|slot| {
                            let class = if slot < stars { "star star-filled" } else { "star" };
                            view! { <span class=class>"\u{2605}"</span> }
                        })
                        .collect_view()}
                    <span class="rating-label">{rating_label}</span>
                </div>
                <div class="product-footer">
                    <span class="product-price">{price}</span>
                    <button class="btn-add-to-cart" on:click=move |_| cart.add(&for_cart)>
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
