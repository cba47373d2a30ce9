//! The filter, sort, and truncate pipeline.
//!
//! A pure function of (catalog, display state): no error conditions, an
//! empty catalog or a term with no matches just yields an empty result.

use crate::catalog::Product;
use crate::search::{DisplayState, SortKey};

/// Products whose title contains `term`, case-insensitively, in catalog order.
fn filtered<'a>(catalog: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .collect()
}

/// Number of catalog items matching `term`, before pagination.
pub fn matching_count(catalog: &[Product], term: &str) -> usize {
    filtered(catalog, term).len()
}

/// Run the pipeline: filter by the search term, order by the sort key, and
/// truncate to the revealed page window.
///
/// Price sorts ascending, rating descending; both sorts are stable, so ties
/// keep catalog order. The result holds at most
/// `state.page_count * PAGE_SIZE` items.
pub fn select(catalog: &[Product], state: &DisplayState) -> Vec<Product> {
    let mut matched: Vec<Product> = filtered(catalog, &state.search_term)
        .into_iter()
        .cloned()
        .collect();

    match state.sort_key {
        SortKey::Price => matched.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents)),
        SortKey::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    matched.truncate(state.visible_limit());
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::search::PAGE_SIZE;

    fn product(id: u64, title: &str, price: f64, rating: f64) -> Product {
        Product::new(id, title, "", "", price, rating)
    }

    fn state(term: &str, key: SortKey, pages: usize) -> DisplayState {
        DisplayState {
            search_term: term.to_string(),
            sort_key: key,
            page_count: pages,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", 20.0, 4.0),
            product(2, "Blue Hat", 10.0, 5.0),
            product(3, "Green Shoe", 15.0, 3.0),
            product(4, "Red Scarf", 12.0, 4.5),
        ]
    }

    #[test]
    fn test_every_result_matches_term() {
        let catalog = sample_catalog();
        let out = select(&catalog, &state("red", SortKey::Price, 1));

        assert!(!out.is_empty());
        for p in &out {
            assert!(p.title.to_lowercase().contains("red"));
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let catalog = sample_catalog();
        let lower = select(&catalog, &state("shoe", SortKey::Price, 1));
        let upper = select(&catalog, &state("SHOE", SortKey::Price, 1));
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_empty_term_matches_all() {
        let catalog = sample_catalog();
        let out = select(&catalog, &state("", SortKey::Price, 1));
        assert_eq!(out.len(), catalog.len());
    }

    #[test]
    fn test_price_sort_is_non_decreasing() {
        let catalog = sample_catalog();
        let out = select(&catalog, &state("", SortKey::Price, 1));
        for pair in out.windows(2) {
            assert!(pair[0].price.amount_cents <= pair[1].price.amount_cents);
        }
    }

    #[test]
    fn test_rating_sort_is_non_increasing() {
        let catalog = sample_catalog();
        let out = select(&catalog, &state("", SortKey::Rating, 1));
        for pair in out.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            product(1, "First", 10.0, 4.0),
            product(2, "Second", 10.0, 4.0),
            product(3, "Third", 10.0, 4.0),
        ];

        for key in [SortKey::Price, SortKey::Rating] {
            let out = select(&catalog, &state("", key, 1));
            let ids: Vec<ProductId> = out.iter().map(|p| p.id).collect();
            assert_eq!(
                ids,
                vec![ProductId::new(1), ProductId::new(2), ProductId::new(3)]
            );
        }
    }

    #[test]
    fn test_truncates_to_page_window() {
        let catalog: Vec<Product> = (0..35)
            .map(|i| product(i, &format!("Item {i}"), i as f64, 3.0))
            .collect();

        let one_page = select(&catalog, &state("", SortKey::Price, 1));
        assert_eq!(one_page.len(), PAGE_SIZE);

        let two_pages = select(&catalog, &state("", SortKey::Price, 2));
        assert_eq!(two_pages.len(), 2 * PAGE_SIZE);

        // Never more than what the catalog has to offer.
        let many_pages = select(&catalog, &state("", SortKey::Price, 100));
        assert_eq!(many_pages.len(), 35);
    }

    #[test]
    fn test_next_page_extends_previous_in_order() {
        let catalog: Vec<Product> = (0..35)
            .map(|i| product(i, &format!("Item {i}"), (70 - i) as f64, 3.0))
            .collect();

        let short = select(&catalog, &state("", SortKey::Price, 2));
        let long = select(&catalog, &state("", SortKey::Price, 3));

        assert!(long.len() > short.len());
        assert_eq!(&long[..short.len()], &short[..]);
    }

    #[test]
    fn test_shoe_hat_scenario() {
        // Catalog from the canonical two-product scenario.
        let catalog = vec![
            product(1, "Red Shoe", 20.0, 4.0),
            product(2, "Blue Hat", 10.0, 5.0),
        ];

        let by_price = select(&catalog, &state("", SortKey::Price, 1));
        assert_eq!(by_price[0].title, "Blue Hat");
        assert_eq!(by_price[1].title, "Red Shoe");

        let by_rating = select(&catalog, &state("", SortKey::Rating, 1));
        assert_eq!(by_rating[0].title, "Blue Hat"); // 5 before 4
        assert_eq!(by_rating[1].title, "Red Shoe");

        let red = select(&catalog, &state("red", SortKey::Price, 1));
        assert_eq!(red.len(), 1);
        assert_eq!(red[0].title, "Red Shoe");
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let out = select(&[], &state("", SortKey::Price, 1));
        assert!(out.is_empty());
        assert_eq!(matching_count(&[], ""), 0);
    }

    #[test]
    fn test_no_matches_yields_empty_result() {
        let catalog = sample_catalog();
        let out = select(&catalog, &state("umbrella", SortKey::Price, 1));
        assert!(out.is_empty());
        assert_eq!(matching_count(&catalog, "umbrella"), 0);
    }

    #[test]
    fn test_matching_count_ignores_pagination() {
        let catalog: Vec<Product> = (0..25)
            .map(|i| product(i, &format!("Item {i}"), 1.0, 3.0))
            .collect();

        assert_eq!(matching_count(&catalog, ""), 25);
        assert_eq!(matching_count(&catalog, "item 1"), 11); // 1 and 10-19
    }
}
