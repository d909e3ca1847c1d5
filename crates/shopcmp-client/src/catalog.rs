//! Catalog, review and compare endpoints.

use shopcmp_core::{ComparisonResult, Product, ProductDetail, ProductId, ReviewPage};

use crate::client::ShopClient;
use crate::error::ClientError;
use crate::request::RequestOptions;

impl ShopClient {
    /// Searches the catalog: `GET /search?query=...`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `query` is blank; nothing is sent.
    /// - Any error from [`ShopClient::fetch_with_retry`].
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::Validation(
                "search query must not be empty".to_owned(),
            ));
        }
        let url = self.endpoint(&["search"]);
        let products: Vec<Product> = self
            .fetch(url, &RequestOptions::get().query("query", query))
            .await?;
        tracing::debug!(query, results = products.len(), "search complete");
        Ok(products)
    }

    /// Fetches a product's description and specification groups: `GET /product/{id}`.
    ///
    /// # Errors
    ///
    /// Any error from [`ShopClient::fetch_with_retry`].
    pub async fn product_detail(&self, id: &ProductId) -> Result<ProductDetail, ClientError> {
        let url = self.endpoint(&["product", id.as_str()]);
        self.fetch(url, &RequestOptions::get()).await
    }

    /// Fetches one page of reviews: `GET /product/{id}/reviews?page=n`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] if `page` is 0.
    /// - Any error from [`ShopClient::fetch_with_retry`].
    pub async fn product_reviews(
        &self,
        id: &ProductId,
        page: u32,
    ) -> Result<ReviewPage, ClientError> {
        if page == 0 {
            return Err(ClientError::Validation(
                "review pages start at 1".to_owned(),
            ));
        }
        let url = self.endpoint(&["product", id.as_str(), "reviews"]);
        let options = RequestOptions::get().query("page", &page.to_string());
        self.fetch(url, &options).await
    }

    /// Submits a comparison prompt: `POST /compare` with `{"prompt": ...}`.
    ///
    /// # Errors
    ///
    /// Any error from [`ShopClient::fetch_with_retry`].
    pub async fn compare(&self, prompt: &str) -> Result<ComparisonResult, ClientError> {
        let url = self.endpoint(&["compare"]);
        let options = RequestOptions::post_json(serde_json::json!({ "prompt": prompt }));
        self.fetch(url, &options).await
    }
}
