//! Product search and filtering, paged locally.

use crate::config::PagingConfig;
use crate::pager::ClientPager;
use crate::snapshot::PageSnapshot;
use crate::source::{FetchRequest, Fetched, PendingFetch, ProductSource};
use crate::tracker::RequestTracker;
use grocer_core::catalog::Product;
use grocer_core::search::{FetchPlan, FilterCriteria, PageInfo, PageWindow};
use grocer_core::Route;

/// The Products screen.
///
/// Search text and structured filters are alternatives: submitting a search
/// discards the filters, and editing a filter clears the search text.
#[derive(Debug)]
pub struct ProductsView {
    search_text: String,
    criteria: FilterCriteria,
    pager: ClientPager,
    tracker: RequestTracker,
}

impl ProductsView {
    pub fn new(paging: &PagingConfig) -> Self {
        Self {
            search_text: String::new(),
            criteria: FilterCriteria::new(),
            pager: ClientPager::new(paging.products_page_size),
            tracker: RequestTracker::new(),
        }
    }

    /// Fetch for the current search and filter state.
    pub fn begin_load(&mut self) -> PendingFetch {
        self.pager.rewind();
        let plan = self.plan();
        let guard = self.tracker.issue();
        tracing::debug!(ticket = guard.ticket(), plan = plan.kind(), "products fetch issued");
        PendingFetch::new(FetchRequest::Products(plan), guard)
    }

    /// Take search state from `route`. Returns `None` for non-product routes.
    pub fn mount_route(&mut self, route: &Route) -> Option<PendingFetch> {
        let Route::Products { query, category } = route else {
            return None;
        };

        self.search_text = query.clone().unwrap_or_default();
        self.criteria = match (query, category) {
            (None, Some(category)) => FilterCriteria::new().with_category(category.clone()),
            _ => FilterCriteria::new(),
        };
        tracing::info!(route = %route, "products view mounted");
        Some(self.begin_load())
    }

    /// Submit the search box. Blank text clears everything.
    pub fn submit_search(&mut self, text: &str) -> PendingFetch {
        self.search_text = text.trim().to_string();
        self.criteria = FilterCriteria::new();
        self.begin_load()
    }

    /// Change one or more filters and re-fetch from the first page.
    pub fn edit_filters(&mut self, edit: impl FnOnce(&mut FilterCriteria)) -> PendingFetch {
        edit(&mut self.criteria);
        self.search_text.clear();
        self.begin_load()
    }

    /// Replace the whole filter set.
    pub fn set_filters(&mut self, criteria: FilterCriteria) -> PendingFetch {
        self.edit_filters(|current| *current = criteria)
    }

    /// "Clear All": drop search text and filters.
    pub fn clear(&mut self) -> PendingFetch {
        self.search_text.clear();
        self.criteria = FilterCriteria::new();
        self.begin_load()
    }

    /// Apply a finished fetch. Returns `false` when it was stale and dropped.
    pub fn complete(&mut self, mut outcome: Fetched) -> bool {
        if !outcome.is_latest_of(&self.tracker) {
            tracing::debug!(ticket = outcome.ticket(), "discarding stale products response");
            return false;
        }
        let products = outcome.take_products("products");
        tracing::info!(count = products.len(), "products loaded");
        self.pager.replace(products);
        true
    }

    pub async fn load<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.begin_load().run(source).await;
        self.complete(outcome)
    }

    pub async fn open<S>(&mut self, source: &S, route: &Route) -> bool
    where
        S: ProductSource + ?Sized,
    {
        match self.mount_route(route) {
            Some(pending) => {
                let outcome = pending.run(source).await;
                self.complete(outcome)
            }
            None => false,
        }
    }

    pub async fn search<S>(&mut self, source: &S, text: &str) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.submit_search(text).run(source).await;
        self.complete(outcome)
    }

    pub async fn filter<S>(&mut self, source: &S, criteria: FilterCriteria) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.set_filters(criteria).run(source).await;
        self.complete(outcome)
    }

    pub async fn clear_all<S>(&mut self, source: &S) -> bool
    where
        S: ProductSource + ?Sized,
    {
        let outcome = self.clear().run(source).await;
        self.complete(outcome)
    }

    /// Which request the current state maps to.
    pub fn plan(&self) -> FetchPlan {
        FetchPlan::resolve(&self.search_text, &self.criteria)
    }

    /// Whether the "Clear All" affordance applies.
    pub fn has_active_criteria(&self) -> bool {
        !self.search_text.trim().is_empty() || !self.criteria.clone().normalize().is_empty()
    }

    /// Bookmarkable route for the current state.
    pub fn route(&self) -> Route {
        match self.plan() {
            FetchPlan::Search(query) => Route::Products {
                query: Some(query),
                category: None,
            },
            FetchPlan::Filter(criteria) => Route::Products {
                query: None,
                category: criteria.category,
            },
            FetchPlan::AllAvailable => Route::Products {
                query: None,
                category: None,
            },
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
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

    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let window = self.window();
        PageSnapshot {
            view: "products",
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
