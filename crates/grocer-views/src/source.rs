//! Where views get their products from.

use crate::tracker::{InFlight, RequestTracker};
use async_trait::async_trait;
use grocer_core::catalog::Product;
use grocer_core::search::{FetchPlan, FilterCriteria};
use grocer_core::StoreName;
use grocer_data::{FetchError, GroceryApi};

/// Upstream product queries used by the views.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Top `limit` deals across all stores.
    async fn top_deals(&self, limit: usize) -> Result<Vec<Product>, FetchError>;

    /// Free-text search.
    async fn search(&self, query: &str) -> Result<Vec<Product>, FetchError>;

    /// Structured filter.
    async fn compare(&self, criteria: &FilterCriteria) -> Result<Vec<Product>, FetchError>;

    /// One page of a single store's catalog.
    async fn store_page(
        &self,
        store: &StoreName,
        page: usize,
        size: usize,
    ) -> Result<Vec<Product>, FetchError>;
}

#[async_trait]
impl ProductSource for GroceryApi {
    async fn top_deals(&self, limit: usize) -> Result<Vec<Product>, FetchError> {
        GroceryApi::top_deals(self, limit).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        GroceryApi::search(self, query).await
    }

    async fn compare(&self, criteria: &FilterCriteria) -> Result<Vec<Product>, FetchError> {
        GroceryApi::compare(self, criteria).await
    }

    async fn store_page(
        &self,
        store: &StoreName,
        page: usize,
        size: usize,
    ) -> Result<Vec<Product>, FetchError> {
        GroceryApi::store_page(self, store, page, size).await
    }
}

/// A single request a view wants made.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    TopDeals { limit: usize },
    Products(FetchPlan),
    StorePage {
        store: StoreName,
        page: usize,
        size: usize,
    },
}

impl FetchRequest {
    pub async fn run<S>(&self, source: &S) -> Result<Vec<Product>, FetchError>
    where
        S: ProductSource + ?Sized,
    {
        match self {
            FetchRequest::TopDeals { limit } => source.top_deals(*limit).await,
            FetchRequest::Products(FetchPlan::AllAvailable) => {
                source.compare(&FilterCriteria::all_available()).await
            }
            FetchRequest::Products(FetchPlan::Search(query)) => source.search(query).await,
            FetchRequest::Products(FetchPlan::Filter(criteria)) => source.compare(criteria).await,
            FetchRequest::StorePage { store, page, size } => {
                source.store_page(store, *page, *size).await
            }
        }
    }
}

/// An issued request that has not run yet.
///
/// Holds the view's in-flight guard; dropping it without completing settles
/// the request, so the view never stays stuck loading.
#[derive(Debug)]
pub struct PendingFetch {
    request: FetchRequest,
    guard: InFlight,
}

impl PendingFetch {
    pub(crate) fn new(request: FetchRequest, guard: InFlight) -> Self {
        Self { request, guard }
    }

    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    pub fn ticket(&self) -> u64 {
        self.guard.ticket()
    }

    /// Run against `source`. The result is handed back to the issuing view.
    pub async fn run<S>(self, source: &S) -> Fetched
    where
        S: ProductSource + ?Sized,
    {
        let result = self.request.run(source).await;
        Fetched {
            request: self.request,
            guard: self.guard,
            result,
        }
    }
}

/// The outcome of a [`PendingFetch`], ready to apply to its view.
#[derive(Debug)]
pub struct Fetched {
    request: FetchRequest,
    guard: InFlight,
    result: Result<Vec<Product>, FetchError>,
}

impl Fetched {
    pub fn ticket(&self) -> u64 {
        self.guard.ticket()
    }

    pub fn request(&self) -> &FetchRequest {
        &self.request
    }

    /// Whether this outcome answers the latest request of its issuing view.
    pub fn is_current(&self) -> bool {
        self.guard.is_current()
    }

    /// Whether this outcome answers `tracker`'s latest request.
    pub(crate) fn is_latest_of(&self, tracker: &RequestTracker) -> bool {
        self.guard.issued_by(tracker) && self.guard.is_current()
    }

    /// Products on success, or the logged failure collapsed to empty.
    ///
    /// The guard stays alive until the outcome itself is dropped.
    pub(crate) fn take_products(&mut self, view: &'static str) -> Vec<Product> {
        match std::mem::replace(&mut self.result, Ok(Vec::new())) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(view, ticket = self.guard.ticket(), error = %e, "fetch failed");
                Vec::new()
            }
        }
    }
}
