//! Paging over fetched products.
//!
//! [`ClientPager`] holds a whole candidate set and slices it locally.
//! [`ServerPager`] holds one server page and infers "next" from its size.

use grocer_core::catalog::Product;
use grocer_core::search::{PageInfo, PageWindow};

/// Local pagination over a fully fetched candidate set.
#[derive(Debug, Clone)]
pub struct ClientPager {
    items: Vec<Product>,
    page_index: usize,
    page_size: usize,
}

impl ClientPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the candidate set and return to the first page.
    pub fn replace(&mut self, items: Vec<Product>) {
        self.items = items;
        self.page_index = 0;
    }

    /// Return to the first page without touching the candidates.
    pub fn rewind(&mut self) {
        self.page_index = 0;
    }

    pub fn window(&self) -> PageWindow<'_, Product> {
        PageWindow::compute(&self.items, self.page_index, self.page_size)
    }

    pub fn info(&self) -> PageInfo {
        PageInfo::new(self.page_index, self.page_size, self.items.len())
    }

    /// Advance one page. Ignored when there is no next page.
    pub fn next(&mut self) -> bool {
        if !self.info().has_next {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Go back one page. Ignored on the first page.
    pub fn prev(&mut self) -> bool {
        if !self.info().has_prev {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Jump to a page. Out-of-range pages are rejected.
    pub fn go_to(&mut self, page_index: usize) -> bool {
        if !self.info().contains_page(page_index) {
            return false;
        }
        self.page_index = page_index;
        true
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The whole candidate set.
    pub fn items(&self) -> &[Product] {
        &self.items
    }
}

/// One page of server-side results.
///
/// The server reports no total, so a full page is taken to mean more may
/// follow. A short or empty page ends forward navigation.
#[derive(Debug, Clone)]
pub struct ServerPager {
    items: Vec<Product>,
    page_index: usize,
    page_size: usize,
    has_next: bool,
}

impl ServerPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            page_size: page_size.max(1),
            has_next: false,
        }
    }

    /// Clear results and return to the first page.
    pub fn reset(&mut self) {
        self.items.clear();
        self.page_index = 0;
        self.has_next = false;
    }

    /// Show `items` as page `page_index`.
    pub fn apply(&mut self, page_index: usize, items: Vec<Product>) {
        self.has_next = items.len() == self.page_size;
        self.page_index = page_index;
        self.items = items;
    }

    /// Page to request for "next", if forward navigation is enabled.
    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then_some(self.page_index + 1)
    }

    /// Page to request for "previous", if not on the first page.
    pub fn prev_page(&self) -> Option<usize> {
        self.page_index.checked_sub(1)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }
}
