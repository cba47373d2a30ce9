//! Catalog fetch.

use velo_commerce::catalog::Product;
use velo_data::{FetchClient, FetchError};

/// Fetch the full product catalog.
///
/// One unauthenticated read-only request; the endpoint returns the entire
/// catalog as a JSON array, with no server-side pagination.
pub async fn fetch_catalog(client: &FetchClient, url: &str) -> Result<Vec<Product>, FetchError> {
    client
        .get(url)
        .accept("application/json")
        .send()
        .await?
        .error_for_status()?
        .json()
}
