//! JSON-LD script block for a product.

use leptos::prelude::*;
use velo_commerce::catalog::Product;
use velo_seo::ProductJsonLd;

/// Structured-data block so search engines can read the product.
#[component]
pub fn JsonLd(product: Product) -> impl IntoView {
    let payload = ProductJsonLd::from_product(&product).to_json();

    view! {
        <script type="application/ld+json" inner_html=payload></script>
    }
}
