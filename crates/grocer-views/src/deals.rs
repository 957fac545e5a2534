//! Top deals, fetched once and paged locally.

use crate::config::PagingConfig;
use crate::pager::ClientPager;
use crate::snapshot::PageSnapshot;
use crate::source::{FetchRequest, Fetched, PendingFetch, ProductSource};
use crate::tracker::RequestTracker;
use grocer_core::catalog::Product;
use grocer_core::search::{PageInfo, PageWindow};

/// The Deals screen.
#[derive(Debug)]
pub struct DealsView {
    pager: ClientPager,
    limit: usize,
    tracker: RequestTracker,
}

impl DealsView {
    pub fn new(paging: &PagingConfig) -> Self {
        Self {
            pager: ClientPager::new(paging.deals_page_size),
            limit: paging.deals_limit,
            tracker: RequestTracker::new(),
        }
    }

    /// Issue the bulk deals request.
    pub fn begin_load(&mut self) -> PendingFetch {
        let guard = self.tracker.issue();
        tracing::debug!(ticket = guard.ticket(), limit = self.limit, "deals fetch issued");
        PendingFetch::new(FetchRequest::TopDeals { limit: self.limit }, guard)
    }

    /// Apply a finished fetch. Returns `false` when it was stale and dropped.
    pub fn complete(&mut self, mut outcome: Fetched) -> bool {
        if !outcome.is_latest_of(&self.tracker) {
            tracing::debug!(ticket = outcome.ticket(), "discarding stale deals response");
            return false;
        }
        let deals = outcome.take_products("deals");
        tracing::info!(count = deals.len(), "deals loaded");
        self.pager.replace(deals);
        true
    }

    /// Fetch and apply in one step.
    pub async fn load<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.begin_load().run(source).await;
        self.complete(outcome)
    }

    pub fn next(&mut self) -> bool {
        self.pager.next()
    }

    pub fn prev(&mut self) -> bool {
        self.pager.prev()
    }

    pub fn go_to(&mut self, page_index: usize) -> bool {
        self.pager.go_to(page_index)
    }

    pub fn window(&self) -> PageWindow<'_, Product> {
        self.pager.window()
    }

    pub fn info(&self) -> PageInfo {
        self.pager.info()
    }

    pub fn all(&self) -> &[Product] {
        self.pager.items()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let window = self.window();
        PageSnapshot {
            view: "deals",
            page: window.info.display_page(),
            total_pages: Some(window.info.total_pages),
            total: Some(window.info.total),
            has_next: window.has_next(),
            has_prev: window.has_prev(),
            loading: self.is_loading(),
            items: window.items.to_vec(),
        }
    }
}
