//! Serializable view of what a screen currently shows.

use grocer_core::catalog::Product;
use serde::Serialize;

/// One rendered page of a view.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub view: &'static str,
    /// 1-based page number.
    pub page: usize,
    /// Known only for locally paginated views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub has_next: bool,
    pub has_prev: bool,
    pub loading: bool,
    pub items: Vec<Product>,
}
