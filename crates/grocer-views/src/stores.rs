//! Per-store browsing with server-side pages.

use crate::config::PagingConfig;
use crate::pager::ServerPager;
use crate::snapshot::PageSnapshot;
use crate::source::{FetchRequest, Fetched, PendingFetch, ProductSource};
use crate::tracker::RequestTracker;
use grocer_core::catalog::{Product, StoreDirectory};
use grocer_core::StoreName;

/// The Stores screen.
#[derive(Debug)]
pub struct StoresView {
    directory: StoreDirectory,
    active: StoreName,
    pager: ServerPager,
    tracker: RequestTracker,
}

impl StoresView {
    /// Starts on the directory's default store.
    pub fn new(directory: StoreDirectory, paging: &PagingConfig) -> Self {
        let active = directory.default_store().clone();
        Self {
            directory,
            active,
            pager: ServerPager::new(paging.stores_page_size),
            tracker: RequestTracker::new(),
        }
    }

    /// Fetch the first page of the active store.
    pub fn begin_load(&mut self) -> PendingFetch {
        self.pager.reset();
        self.issue_page(0)
    }

    /// Switch stores. Previous results are cleared before the fetch starts.
    ///
    /// Names the directory knows are matched case-insensitively.
    pub fn select_store(&mut self, store: impl Into<StoreName>) -> PendingFetch {
        let store = store.into();
        self.active = self.directory.find(store.as_str()).cloned().unwrap_or(store);
        tracing::info!(store = %self.active, "store selected");
        self.begin_load()
    }

    /// Fetch the following page, if forward navigation is enabled.
    pub fn begin_next(&mut self) -> Option<PendingFetch> {
        let page = self.pager.next_page()?;
        Some(self.issue_page(page))
    }

    /// Fetch the preceding page, unless on the first one.
    pub fn begin_prev(&mut self) -> Option<PendingFetch> {
        let page = self.pager.prev_page()?;
        Some(self.issue_page(page))
    }

    fn issue_page(&mut self, page: usize) -> PendingFetch {
        let guard = self.tracker.issue();
        tracing::debug!(
            ticket = guard.ticket(),
            store = %self.active,
            page,
            "store page fetch issued"
        );
        PendingFetch::new(
            FetchRequest::StorePage {
                store: self.active.clone(),
                page,
                size: self.pager.page_size(),
            },
            guard,
        )
    }

    /// Apply a finished fetch. Returns `false` when it was stale and dropped.
    ///
    /// An empty page reached through "next" is still shown, with forward
    /// navigation disabled and "previous" available.
    pub fn complete(&mut self, mut outcome: Fetched) -> bool {
        if !outcome.is_latest_of(&self.tracker) {
            tracing::debug!(ticket = outcome.ticket(), "discarding stale store response");
            return false;
        }
        let page = match outcome.request() {
            FetchRequest::StorePage { page, .. } => *page,
            _ => return false,
        };
        let products = outcome.take_products("stores");
        tracing::info!(store = %self.active, page, count = products.len(), "store page loaded");
        self.pager.apply(page, products);
        true
    }

    pub async fn load<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.begin_load().run(source).await;
        self.complete(outcome)
    }

    pub async fn select<S>(&mut self, source: &S, store: impl Into<StoreName>) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.select_store(store).run(source).await;
        self.complete(outcome)
    }

    /// Returns `false` without fetching when "next" is disabled.
    pub async fn next<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let Some(pending) = self.begin_next() else {
            return false;
        };
        let outcome = pending.run(source).await;
        self.complete(outcome)
    }

    /// Returns `false` without fetching on the first page.
    pub async fn prev<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let Some(pending) = self.begin_prev() else {
            return false;
        };
        let outcome = pending.run(source).await;
        self.complete(outcome)
    }

    pub fn stores(&self) -> &[StoreName] {
        self.directory.stores()
    }

    pub fn active_store(&self) -> &StoreName {
        &self.active
    }

    pub fn items(&self) -> &[Product] {
        self.pager.items()
    }

    pub fn page_index(&self) -> usize {
        self.pager.page_index()
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.pager.has_prev()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            view: "stores",
            page: self.page_index() + 1,
            total_pages: None,
            total: None,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
            loading: self.is_loading(),
            items: self.items().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> StoresView {
        StoresView::new(StoreDirectory::default(), &PagingConfig::default())
    }

    #[test]
    fn test_starts_on_default_store() {
        let v = view();
        assert_eq!(v.active_store().as_str(), "Walmart");
        assert_eq!(v.stores().len(), 5);
    }

    #[test]
    fn test_select_store_canonicalizes_name() {
        let mut v = view();
        let pending = v.select_store("no frills");
        assert_eq!(v.active_store().as_str(), "No Frills");
        assert_eq!(
            pending.request(),
            &FetchRequest::StorePage {
                store: StoreName::new("No Frills"),
                page: 0,
                size: 20,
            }
        );
    }

    #[test]
    fn test_select_store_asserts_loading_immediately() {
        let mut v = view();
        let _pending = v.select_store("Metro");
        assert!(v.is_loading());
        assert!(v.items().is_empty());
    }

    #[test]
    fn test_navigation_disabled_before_first_page() {
        let mut v = view();
        assert!(v.begin_next().is_none());
        assert!(v.begin_prev().is_none());
        assert!(!v.is_loading());
    }
}
