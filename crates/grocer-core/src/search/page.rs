//! Client-side page windows over a fetched candidate set.

use serde::Serialize;

/// Pager state for one page of a candidate set (0-indexed pages).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (0-indexed).
    pub page_index: usize,
    /// Items per page.
    pub page_size: usize,
    /// Total number of candidates.
    pub total: usize,
    /// Number of pages (0 when there are no candidates).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl PageInfo {
    /// Compute pager state. A page size of zero is treated as one.
    pub fn new(page_index: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);

        Self {
            page_index,
            page_size,
            total,
            total_pages,
            has_next: page_index.saturating_add(1).saturating_mul(page_size) < total,
            has_prev: page_index > 0,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// 1-based page number for captions.
    pub fn display_page(&self) -> usize {
        self.page_index.saturating_add(1)
    }

    /// Whether `page_index` addresses an existing page.
    pub fn contains_page(&self, page_index: usize) -> bool {
        page_index < self.total_pages
    }
}

/// The visible slice of a candidate set plus its pager state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow<'a, T> {
    /// Items on the current page.
    pub items: &'a [T],
    /// Pager state.
    pub info: PageInfo,
}

impl<'a, T> PageWindow<'a, T> {
    /// Slice `all` for `page_index`. Pages past the end yield an empty slice.
    pub fn compute(all: &'a [T], page_index: usize, page_size: usize) -> Self {
        let info = PageInfo::new(page_index, page_size, all.len());
        let start = info.offset().min(all.len());
        let end = start.saturating_add(info.page_size).min(all.len());

        Self {
            items: &all[start..end],
            info,
        }
    }

    pub fn has_next(&self) -> bool {
        self.info.has_next
    }

    pub fn has_prev(&self) -> bool {
        self.info.has_prev
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
