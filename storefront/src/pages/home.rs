//! The catalog page.
//!
//! Owns the catalog and display state: the catalog is fetched once at
//! mount, and everything the user sees derives from
//! `select(catalog, display state)` re-running on signal changes.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use velo_commerce::catalog::Product;
use velo_commerce::search::{matching_count, select, DisplayState, SortKey};
use velo_data::FetchClient;
use velo_observability::{LogFormat, LogLevel, StructuredLogger};

use crate::components::{Header, ProductCard};
use crate::config::StorefrontConfig;
use crate::data;
use crate::sentinel::{self, SentinelGuard};

/// The single storefront page.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let logger = StructuredLogger::new()
        .with_component("home")
        .with_min_level(LogLevel::Info)
        .with_format(LogFormat::Human);

    let catalog = RwSignal::new(Vec::<Product>::new());
    let is_loading = RwSignal::new(true);
    let state = RwSignal::new(DisplayState::new());

    // One-shot catalog fetch at mount. On failure the catalog stays empty
    // and the page falls through to the no-results state.
    {
        let url = config.catalog_url.clone();
        spawn_local(async move {
            let client = FetchClient::new();
            match data::fetch_catalog(&client, &url).await {
                Ok(products) => {
                    logger
                        .info_builder("catalog loaded")
                        .field_i64("products", products.len() as i64)
                        .emit();
                    catalog.set(products);
                }
                Err(e) => {
                    logger
                        .error_builder("catalog fetch failed")
                        .field("error", e.to_string())
                        .emit();
                }
            }
            is_loading.set(false);
        });
    }

    let displayed = Memo::new(move |_| catalog.with(|c| state.with(|s| select(c, s))));
    let matching =
        Memo::new(move |_| catalog.with(|c| state.with(|s| matching_count(c, &s.search_term))));
    let total = Memo::new(move |_| catalog.with(|c| c.len()));

    // Wire the sentinel once its element exists. The guard holds the
    // observer for the lifetime of the page.
    let sentinel_ref: NodeRef<Div> = NodeRef::new();
    let sentinel_guard = StoredValue::new_local(None::<SentinelGuard>);
    Effect::new(move |_| {
        if sentinel_guard.with_value(|g| g.is_some()) {
            return;
        }
        if let Some(element) = sentinel_ref.get() {
            let guard = sentinel::on_sentinel_visible(&element, move || {
                let shown = displayed.with_untracked(|d| d.len());
                let available = matching.get_untracked();
                if sentinel::should_load_more(shown, available) {
                    state.update(|s| s.advance_page());
                }
            });
            sentinel_guard.set_value(guard);
        }
    });

    view! {
        <Header/>
        <main class="page">
            <Show
                when=move || !is_loading.get()
                fallback=|| {
                    view! { <div class="loading">"Loading products..."</div> }
                }
            >
                <section class="toolbar">
                    <input
                        class="search-input"
                        type="text"
                        placeholder="Search products..."
                        prop:value=move || state.with(|s| s.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.set_search_term(term));
                        }
                    />
                    <select
                        class="sort-select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let key = SortKey::from_str(&value).unwrap_or_default();
                            state.update(|s| s.set_sort_key(key));
                        }
                    >
                        <option value=SortKey::Price.as_str()>
                            {SortKey::Price.display_name()}
                        </option>
                        <option value=SortKey::Rating.as_str()>
                            {SortKey::Rating.display_name()}
                        </option>
                    </select>
                    <p class="result-count">
                        "Showing " {move || displayed.with(|d| d.len())} " of "
                        {move || total.get()} " products"
                    </p>
                </section>

                <Show
                    when=move || displayed.with(|d| !d.is_empty())
                    fallback=|| {
                        view! {
                            <p class="no-results">"No products found matching your search."</p>
                        }
                    }
                >
                    <div class="product-grid">
                        {move || {
                            displayed
                                .get()
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <div class="sentinel" node_ref=sentinel_ref></div>
            </Show>
        </main>
    }
}
