//! Site header with the cart widget.

use leptos::prelude::*;

use crate::cart_store::use_cart_store;

/// Fixed header: announcement bar, logo, and the cart widget with a badge
/// and a hover preview of the line items.
#[component]
pub fn Header() -> impl IntoView {
    let cart = use_cart_store();

    view! {
        <header class="site-header">
            <div class="announcement">"Free shipping on orders over $50!"</div>
            <div class="header-main">
                <h1 class="logo">"VeloShop"</h1>
                <div class="cart-widget">
                    <button class="cart-button">
                        "Cart"
                        <Show when=move || (cart.item_count() > 0)>
                            <span class="cart-badge">{move || cart.item_count()}</span>
                        </Show>
                    </button>
                    <div class="cart-preview">
                        <div class="cart-preview-head">
                            <span>"Shopping Cart"</span>
                            <span class="cart-preview-count">
                                {move || cart.item_count()} " items"
                            </span>
                        </div>
                        <Show
                            when=move || !cart.is_empty()
                            fallback=|| view! { <p class="cart-empty">"Your cart is empty"</p> }
                        >
                            <ul class="cart-lines">
                                {move || {
                                    cart.line_items()
                                        .into_iter()
                                        .map(|item| {
                                            let quantity_price = format!(
                                                "{} x {}",
                                                item.quantity,
                                                item.unit_price.display(),
                                            );
                                            view! {
                                                <li class="cart-line">
                                                    <img
                                                        class="cart-line-image"
                                                        src=item.image.clone()
                                                        alt=item.title.clone()
                                                    />
                                                    <div class="cart-line-info">
                                                        <p class="cart-line-title">{item.title.clone()}</p>
                                                        <p class="cart-line-quantity">{quantity_price}</p>
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                            <div class="cart-total">
                                <span>"Total:"</span>
                                <strong>{move || cart.total_price().display()}</strong>
                            </div>
                            <button class="btn-checkout">"Checkout"</button>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}
