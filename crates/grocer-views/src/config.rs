//! Page sizes and request bounds.

use serde::{Deserialize, Serialize};

/// Paging knobs shared by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Deals shown per page.
    pub deals_page_size: usize,
    /// Upper bound on deals fetched in one request.
    pub deals_limit: usize,
    /// Products shown per page.
    pub products_page_size: usize,
    /// Products requested per store page.
    pub stores_page_size: usize,
    /// Deals in the home page teaser.
    pub home_deals_limit: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            deals_page_size: 15,
            deals_limit: 50,
            products_page_size: 20,
            stores_page_size: 20,
            home_deals_limit: 10,
        }
    }
}
