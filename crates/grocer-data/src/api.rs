//! Bindings for the grocery comparison API.

use crate::envelope::products_from_body;
use crate::{ClientRequestBuilder, FetchClient, FetchError};
use grocer_core::catalog::Product;
use grocer_core::route::encode_component;
use grocer_core::search::FilterCriteria;
use grocer_core::StoreName;

const JSON: &str = "application/json";

/// The four upstream calls, each resolving to a product list.
#[derive(Debug, Clone)]
pub struct GroceryApi {
    client: FetchClient,
}

impl GroceryApi {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// `GET /api/deals/top?limit=N`
    pub async fn top_deals(&self, limit: usize) -> Result<Vec<Product>, FetchError> {
        let request = self.client.get("/api/deals/top").query("limit", limit);
        self.fetch_products(request).await
    }

    /// `GET /api/products/search?query=Q`
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        let request = self.client.get("/api/products/search").query("query", query);
        self.fetch_products(request).await
    }

    /// `POST /api/compare` with the criteria as the JSON body.
    ///
    /// The criteria are sent as given; callers normalize first.
    pub async fn compare(&self, criteria: &FilterCriteria) -> Result<Vec<Product>, FetchError> {
        let request = self.client.post("/api/compare").json(criteria)?;
        self.fetch_products(request).await
    }

    /// `GET /api/products/store/{store}?page=P&size=S`
    pub async fn store_page(
        &self,
        store: &StoreName,
        page: usize,
        size: usize,
    ) -> Result<Vec<Product>, FetchError> {
        let path = format!("/api/products/store/{}", encode_component(store.as_str()));
        let request = self
            .client
            .get(path)
            .query("page", page)
            .query("size", size);
        self.fetch_products(request).await
    }

    async fn fetch_products(
        &self,
        request: ClientRequestBuilder,
    ) -> Result<Vec<Product>, FetchError> {
        let request = request.accept(JSON);
        let url = request.request().url().to_string();
        tracing::debug!(%url, method = request.request().method().as_str(), "sending request");

        let response = request.send().await?.error_for_status()?;
        let products = products_from_body(response.bytes())?;
        tracing::debug!(%url, count = products.len(), "received products");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use crate::{Method, Response};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn api(transport: &Arc<RecordingTransport>) -> GroceryApi {
        GroceryApi::new(
            FetchClient::from_shared(transport.clone()).with_base_url("http://localhost:8081"),
        )
    }

    // === Request Shape Tests ===

    #[tokio::test]
    async fn test_top_deals_request() {
        let transport = RecordingTransport::replying(vec![]);
        api(&transport).top_deals(50).await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.method(), Method::Get);
        assert_eq!(sent.url(), "http://localhost:8081/api/deals/top?limit=50");
        assert_eq!(
            sent.headers().get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let transport = RecordingTransport::replying(vec![]);
        api(&transport).search("2% milk").await.unwrap();
        assert_eq!(
            transport.last().url(),
            "http://localhost:8081/api/products/search?query=2%25%20milk"
        );
    }

    #[tokio::test]
    async fn test_compare_posts_criteria() {
        let transport = RecordingTransport::replying(vec![]);
        let criteria = FilterCriteria::new()
            .with_category("Snacks")
            .with_store("Sobeys")
            .normalize();
        api(&transport).compare(&criteria).await.unwrap();

        let sent = transport.last();
        assert_eq!(sent.method(), Method::Post);
        assert_eq!(sent.url(), "http://localhost:8081/api/compare");
        let body: serde_json::Value = serde_json::from_slice(sent.body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"category": "Snacks", "stores": ["Sobeys"]})
        );
    }

    #[tokio::test]
    async fn test_compare_all_available_body() {
        let transport = RecordingTransport::replying(vec![]);
        api(&transport)
            .compare(&FilterCriteria::all_available())
            .await
            .unwrap();
        assert_eq!(
            transport.last().body(),
            Some(br#"{"availability":true}"#.as_slice())
        );
    }

    #[tokio::test]
    async fn test_store_page_encodes_segment() {
        let transport = RecordingTransport::replying(vec![]);
        api(&transport)
            .store_page(&StoreName::new("No Frills"), 2, 20)
            .await
            .unwrap();
        assert_eq!(
            transport.last().url(),
            "http://localhost:8081/api/products/store/No%20Frills?page=2&size=20"
        );
    }

    // === Response Handling Tests ===

    #[tokio::test]
    async fn test_products_are_decoded() {
        let transport = RecordingTransport::replying(vec![Ok(Response::ok_json(
            r#"{"data":[{"id":"a","productName":"Chips","price":"3.49","storeName":"Metro"}]}"#,
        ))]);
        let products = api(&transport).top_deals(10).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name, "Chips");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let transport = RecordingTransport::replying(vec![Ok(Response::new(
            500,
            HashMap::new(),
            b"boom".to_vec(),
        ))]);
        let err = api(&transport).search("milk").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let transport = RecordingTransport::replying(vec![Err(FetchError::Timeout)]);
        let err = api(&transport).top_deals(10).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_empty() {
        let transport =
            RecordingTransport::replying(vec![Ok(Response::ok_json(r#"{"data":"oops"}"#))]);
        let products = api(&transport).top_deals(10).await.unwrap();
        assert!(products.is_empty());
    }
}
