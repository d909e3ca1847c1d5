//! Read-only catalog commands: search, product detail and reviews.

use shopcmp_client::ShopClient;
use shopcmp_core::ProductId;

use crate::render;

/// Print the search results for `query`.
///
/// # Errors
///
/// Returns an error if the query is blank or the request fails after retries.
pub(crate) async fn run_search(client: &ShopClient, query: &str) -> anyhow::Result<()> {
    let products = client.search(query).await?;
    tracing::debug!(query, results = products.len(), "search complete");
    print!("{}", render::SearchResults(&products));
    Ok(())
}

pub(crate) async fn run_product(client: &ShopClient, id: &ProductId) -> anyhow::Result<()> {
    let detail = client.product_detail(id).await?;
    print!("{}", render::ProductView { id, detail: &detail });
    Ok(())
}

pub(crate) async fn run_reviews(
    client: &ShopClient,
    id: &ProductId,
    page: u32,
) -> anyhow::Result<()> {
    let reviews = client.product_reviews(id, page).await?;
    print!("{}", render::ReviewsView(&reviews));
    Ok(())
}
