//! Application root.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, Title};

use crate::cart_store::provide_cart_store;
use crate::config::StorefrontConfig;
use crate::pages::HomePage;

/// App root: registers the head context, the configuration, and the cart
/// store, then renders the catalog page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_cart_store();

    let config = StorefrontConfig::default();
    let title = config.app_name.clone();
    provide_context(config);

    view! {
        <Title text=title/>
        <Meta name="description" content="VeloShop - a client-rendered storefront"/>
        <Link rel="canonical" href="https://veloshop.example/"/>
        <HomePage/>
    }
}
