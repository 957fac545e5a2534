//! End-to-end view behavior against an in-memory product source.

use async_trait::async_trait;
use grocer_core::catalog::{DealType, Product, StoreDirectory};
use grocer_core::search::FilterCriteria;
use grocer_core::{Route, StoreName};
use grocer_data::FetchError;
use grocer_views::prelude::*;
use rstest::{fixture, rstest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Serves a fixed catalog the way the comparison API would.
#[derive(Default)]
struct FakeSource {
    deals: Vec<Product>,
    catalog: Vec<Product>,
    failing: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn with_deals(n: usize) -> Self {
        Self {
            deals: numbered(n, "Metro"),
            ..Self::default()
        }
    }

    fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    fn fail(&self, on: bool) {
        self.failing.store(on, Ordering::SeqCst);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            Err(FetchError::HttpError {
                status: 502,
                message: "bad gateway".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductSource for FakeSource {
    async fn top_deals(&self, limit: usize) -> Result<Vec<Product>, FetchError> {
        self.record(format!("deals limit={limit}"))?;
        Ok(self.deals.iter().take(limit).cloned().collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        self.record(format!("search {query}"))?;
        let needle = query.to_lowercase();
        Ok(self
            .catalog
            .iter()
            .filter(|p| p.product_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn compare(&self, criteria: &FilterCriteria) -> Result<Vec<Product>, FetchError> {
        self.record(format!("compare {}", serde_json::to_string(criteria).unwrap()))?;
        Ok(self
            .catalog
            .iter()
            .filter(|p| criteria.category.as_ref().map_or(true, |c| &p.category == c))
            .filter(|p| criteria.stores.is_empty() || criteria.stores.contains(&p.store_name))
            .filter(|p| criteria.sale_only != Some(true) || p.sale_price.is_some())
            .cloned()
            .collect())
    }

    async fn store_page(
        &self,
        store: &StoreName,
        page: usize,
        size: usize,
    ) -> Result<Vec<Product>, FetchError> {
        self.record(format!("store {store} page={page} size={size}"))?;
        Ok(self
            .catalog
            .iter()
            .filter(|p| &p.store_name == store)
            .skip(page * size)
            .take(size)
            .cloned()
            .collect())
    }
}

/// Never answers.
struct StalledSource;

#[async_trait]
impl ProductSource for StalledSource {
    async fn top_deals(&self, _limit: usize) -> Result<Vec<Product>, FetchError> {
        std::future::pending().await
    }

    async fn search(&self, _query: &str) -> Result<Vec<Product>, FetchError> {
        std::future::pending().await
    }

    async fn compare(&self, _criteria: &FilterCriteria) -> Result<Vec<Product>, FetchError> {
        std::future::pending().await
    }

    async fn store_page(
        &self,
        _store: &StoreName,
        _page: usize,
        _size: usize,
    ) -> Result<Vec<Product>, FetchError> {
        std::future::pending().await
    }
}

fn numbered(n: usize, store: &str) -> Vec<Product> {
    (0..n)
        .map(|i| Product::new(format!("{store}-{i}"), format!("Item {i}"), store, "2.99"))
        .collect()
}

fn ids(items: &[Product]) -> Vec<String> {
    items.iter().map(|p| p.id.to_string()).collect()
}

#[fixture]
fn paging() -> PagingConfig {
    PagingConfig::default()
}

#[fixture]
fn grocery_catalog() -> Vec<Product> {
    let mut catalog = numbered(60, "Walmart");
    catalog.extend(numbered(25, "Sobeys").into_iter().map(|p| p.with_category("Snacks")));
    catalog.extend(numbered(5, "Metro").into_iter().map(|p| p.with_category("Bakery")));
    catalog.push(
        Product::new("milk-1", "Whole Milk", "Metro", "5.49")
            .with_category("Drinks")
            .with_sale(DealType::Sale, "4.49"),
    );
    catalog.push(Product::new("milk-2", "Skim Milk", "FreshCo", "4.99").with_category("Drinks"));
    catalog
}

// === Deals ===

#[rstest]
#[tokio::test]
async fn test_deals_walk_37_items_in_pages_of_15(paging: PagingConfig) {
    let source = FakeSource::with_deals(37);
    let mut view = DealsView::new(&paging);

    assert!(view.load(&source).await);
    assert_eq!(source.calls(), vec!["deals limit=50"]);

    let window = view.window();
    assert_eq!(window.len(), 15);
    assert!(window.has_next());
    assert!(!window.has_prev());

    assert!(view.next());
    assert_eq!(ids(view.window().items)[0], "Metro-15");
    assert!(view.window().has_next());

    assert!(view.next());
    assert_eq!(view.window().len(), 7);
    assert!(!view.window().has_next());
    assert!(view.window().has_prev());

    assert!(!view.next());
    assert_eq!(view.info().page_index, 2);
    assert_eq!(view.info().total_pages, 3);
}

#[rstest]
#[tokio::test]
async fn test_deals_bounded_by_limit(paging: PagingConfig) {
    let source = FakeSource::with_deals(80);
    let mut view = DealsView::new(&paging);
    view.load(&source).await;
    assert_eq!(view.all().len(), 50);
}

#[rstest]
#[tokio::test]
async fn test_deals_failure_shows_empty_state(paging: PagingConfig) {
    let source = FakeSource::with_deals(37);
    source.fail(true);
    let mut view = DealsView::new(&paging);

    assert!(view.load(&source).await);
    assert!(view.window().is_empty());
    assert!(!view.window().has_next());
    assert!(!view.is_loading());

    let snapshot = view.snapshot();
    assert_eq!(snapshot.total, Some(0));
    assert!(snapshot.items.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_deals_reload_replaces_and_rewinds(paging: PagingConfig) {
    let source = FakeSource::with_deals(37);
    let mut view = DealsView::new(&paging);
    view.load(&source).await;
    view.next();
    assert_eq!(view.info().page_index, 1);

    view.load(&source).await;
    assert_eq!(view.info().page_index, 0);
    assert_eq!(view.window().len(), 15);
}

// === Products ===

#[rstest]
#[tokio::test]
async fn test_products_initial_load_is_all_available(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);

    view.load(&source).await;
    assert_eq!(source.calls(), vec![r#"compare {"availability":true}"#]);
    assert_eq!(view.info().total, 92);
    assert_eq!(view.window().len(), 20);
}

#[rstest]
#[tokio::test]
async fn test_products_filter_request_is_normalized(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);

    let criteria = FilterCriteria::new()
        .with_category("Snacks")
        .with_price_range(0.0, 0.0)
        .in_stock_only(false)
        .sale_only(false);
    view.filter(&source, criteria).await;

    assert_eq!(source.calls(), vec![r#"compare {"category":"Snacks"}"#]);
    assert_eq!(view.info().total, 25);
    assert!(view.has_active_criteria());
}

#[rstest]
#[tokio::test]
async fn test_products_filter_resets_page(paging: PagingConfig, grocery_catalog: Vec<Product>) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);
    view.load(&source).await;
    view.next();
    view.next();
    assert_eq!(view.info().page_index, 2);

    view.filter(&source, FilterCriteria::new().with_store("Walmart"))
        .await;
    assert_eq!(view.info().page_index, 0);
    assert_eq!(view.info().total, 60);
}

#[rstest]
#[tokio::test]
async fn test_products_clear_restores_unfiltered_first_page(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);
    view.load(&source).await;
    let unfiltered = ids(view.window().items);

    view.filter(&source, FilterCriteria::new().sale_only(true)).await;
    assert_eq!(view.info().total, 1);
    view.search(&source, "milk").await;
    assert_eq!(view.info().total, 2);

    view.clear_all(&source).await;
    assert_eq!(ids(view.window().items), unfiltered);
    assert_eq!(view.info().page_index, 0);
    assert!(!view.has_active_criteria());
}

#[rstest]
#[tokio::test]
async fn test_products_same_criteria_twice_is_stable(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);

    view.filter(&source, FilterCriteria::new().with_store("Walmart"))
        .await;
    view.go_to(1);
    let first = ids(view.window().items);

    view.filter(&source, FilterCriteria::new().with_store("Walmart"))
        .await;
    view.go_to(1);
    assert_eq!(ids(view.window().items), first);
}

#[rstest]
#[tokio::test]
async fn test_products_open_search_route(paging: PagingConfig, grocery_catalog: Vec<Product>) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);

    let route = HomeView::new(&paging).search("Milk");
    assert_eq!(route.to_href(), "/products?query=Milk");

    assert!(view.open(&source, &Route::parse("/search?query=Milk")).await);
    assert_eq!(source.calls(), vec!["search Milk"]);
    assert_eq!(view.info().total, 2);
    assert_eq!(view.route(), route);
}

#[rstest]
#[tokio::test]
async fn test_products_latest_request_wins(paging: PagingConfig, grocery_catalog: Vec<Product>) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);

    let search = view.submit_search("milk");
    let filter = view.set_filters(FilterCriteria::new().with_category("Bakery"));

    let filtered = filter.run(&source).await;
    let searched = search.run(&source).await;
    assert!(!searched.is_current());

    assert!(view.complete(filtered));
    assert!(!view.complete(searched));
    assert_eq!(view.info().total, 5);
    assert!(!view.is_loading());
}

#[rstest]
#[tokio::test]
async fn test_products_stale_response_arriving_last_is_ignored(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);

    let search = view.submit_search("milk");
    let filter = view.set_filters(FilterCriteria::new().with_category("Bakery"));

    let searched = search.run(&source).await;
    assert!(!view.complete(searched));
    assert!(view.is_loading());

    let filtered = filter.run(&source).await;
    assert!(view.complete(filtered));
    assert_eq!(view.info().total, 5);
    assert!(!view.is_loading());
}

#[rstest]
#[tokio::test]
async fn test_products_error_clears_loading(paging: PagingConfig, grocery_catalog: Vec<Product>) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = ProductsView::new(&paging);
    view.load(&source).await;

    source.fail(true);
    view.search(&source, "milk").await;
    assert!(view.window().is_empty());
    assert!(!view.window().has_next());
    assert!(!view.is_loading());
}

#[rstest]
#[tokio::test]
async fn test_abandoned_request_clears_loading(paging: PagingConfig) {
    let mut view = ProductsView::new(&paging);
    let pending = view.begin_load();
    assert!(view.is_loading());

    let timed_out = tokio::time::timeout(Duration::from_millis(20), pending.run(&StalledSource)).await;
    assert!(timed_out.is_err());
    assert!(!view.is_loading());
}

// === Stores ===

#[rstest]
#[tokio::test]
async fn test_stores_empty_page_after_full_pages(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = StoresView::new(StoreDirectory::default(), &paging);

    view.load(&source).await;
    assert_eq!(view.items().len(), 20);
    assert!(view.next(&source).await);
    assert!(view.next(&source).await);
    assert_eq!(view.page_index(), 2);
    assert_eq!(view.items().len(), 20);
    assert!(view.has_next());

    assert!(view.next(&source).await);
    assert_eq!(view.page_index(), 3);
    assert!(view.items().is_empty());
    assert!(view.has_prev());
    assert!(!view.has_next());

    assert!(!view.next(&source).await);
    assert_eq!(view.page_index(), 3);
    assert_eq!(
        source.calls().last().map(String::as_str),
        Some("store Walmart page=3 size=20")
    );

    assert!(view.prev(&source).await);
    assert_eq!(view.page_index(), 2);
    assert_eq!(view.items().len(), 20);
}

#[rstest]
#[tokio::test]
async fn test_stores_short_page_disables_next(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = StoresView::new(StoreDirectory::default(), &paging);

    view.select(&source, "Sobeys").await;
    assert!(view.has_next());
    view.next(&source).await;
    assert_eq!(view.items().len(), 5);
    assert!(!view.has_next());
}

#[rstest]
#[tokio::test]
async fn test_stores_switch_resets_to_first_page(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = StoresView::new(StoreDirectory::default(), &paging);
    view.load(&source).await;
    view.next(&source).await;
    assert_eq!(view.page_index(), 1);

    let pending = view.select_store("Metro");
    assert!(view.items().is_empty());
    assert_eq!(view.page_index(), 0);
    assert!(view.is_loading());

    let outcome = pending.run(&source).await;
    assert!(view.complete(outcome));
    assert_eq!(view.active_store().as_str(), "Metro");
    assert_eq!(view.items().len(), 6);
    assert!(!view.is_loading());
}

#[rstest]
#[tokio::test]
async fn test_stores_switch_discards_previous_store_response(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut view = StoresView::new(StoreDirectory::default(), &paging);

    let walmart = view.begin_load();
    let sobeys = view.select_store("Sobeys");

    let late = walmart.run(&source).await;
    let fresh = sobeys.run(&source).await;
    assert!(view.complete(fresh));
    assert!(!view.complete(late));
    assert!(view.items().iter().all(|p| p.store_name.as_str() == "Sobeys"));
}

#[rstest]
#[tokio::test]
async fn test_stores_failure_is_empty_and_final(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    source.fail(true);
    let mut view = StoresView::new(StoreDirectory::default(), &paging);

    view.load(&source).await;
    assert!(view.items().is_empty());
    assert!(!view.has_next());
    assert!(!view.is_loading());
}

#[rstest]
#[tokio::test]
async fn test_outcome_from_another_view_is_rejected(
    paging: PagingConfig,
    grocery_catalog: Vec<Product>,
) {
    let source = FakeSource::with_catalog(grocery_catalog);
    let mut stores = StoresView::new(StoreDirectory::default(), &paging);
    let mut products = ProductsView::new(&paging);

    let outcome = products.begin_load().run(&source).await;
    let _pending = stores.begin_load();
    assert!(!stores.complete(outcome));
}

// === Home ===

#[rstest]
#[tokio::test]
async fn test_home_teaser_loads_ten(paging: PagingConfig) {
    let source = FakeSource::with_deals(37);
    let mut view = HomeView::new(&paging);
    view.load(&source).await;
    assert_eq!(view.deals().len(), 10);
    assert_eq!(source.calls(), vec!["deals limit=10"]);
}

#[rstest]
#[tokio::test]
async fn test_home_blank_search_goes_to_products(paging: PagingConfig) {
    let view = HomeView::new(&paging);
    assert_eq!(view.search("  ").to_href(), "/products");
}
