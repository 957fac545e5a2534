//! Landing page: a short trending-deals teaser and a search box.

use crate::config::PagingConfig;
use crate::source::{FetchRequest, Fetched, PendingFetch, ProductSource};
use crate::tracker::RequestTracker;
use grocer_core::catalog::Product;
use grocer_core::Route;

#[derive(Debug)]
pub struct HomeView {
    limit: usize,
    deals: Vec<Product>,
    tracker: RequestTracker,
}

impl HomeView {
    pub fn new(paging: &PagingConfig) -> Self {
        Self {
            limit: paging.home_deals_limit,
            deals: Vec::new(),
            tracker: RequestTracker::new(),
        }
    }

    pub fn begin_load(&mut self) -> PendingFetch {
        let guard = self.tracker.issue();
        tracing::debug!(ticket = guard.ticket(), limit = self.limit, "home deals fetch issued");
        PendingFetch::new(FetchRequest::TopDeals { limit: self.limit }, guard)
    }

    pub fn complete(&mut self, mut outcome: Fetched) -> bool {
        if !outcome.is_latest_of(&self.tracker) {
            tracing::debug!(ticket = outcome.ticket(), "discarding stale home response");
            return false;
        }
        self.deals = outcome.take_products("home");
        true
    }

    pub async fn load<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.begin_load().run(source).await;
        self.complete(outcome)
    }

    /// Where submitting `text` in the search box navigates.
    pub fn search(&self, text: &str) -> Route {
        Route::search(text)
    }

    pub fn deals(&self) -> &[Product] {
        &self.deals
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }
}
