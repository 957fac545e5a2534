//! Stores and categories offered by the comparison service.

use crate::ids::StoreName;

/// Stores the comparison service tracks, in display order.
pub const KNOWN_STORES: [&str; 5] = ["Walmart", "Metro", "FreshCo", "Sobeys", "No Frills"];

/// Store selected when the stores view is first mounted.
pub const DEFAULT_STORE: &str = "Walmart";

/// Categories offered by the structured filter.
pub const FILTER_CATEGORIES: [&str; 3] = ["Drinks", "Snacks", "Bakery"];

/// Canonical spelling of an offered filter category, ignoring ASCII case.
pub fn filter_category(name: &str) -> Option<&'static str> {
    let name = name.trim();
    FILTER_CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

/// Ordered store directory with an initial selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDirectory {
    stores: Vec<StoreName>,
    default: StoreName,
}

impl StoreDirectory {
    /// Build a directory. An empty list falls back to the known stores, and a
    /// default that is not listed falls back to the first entry.
    pub fn new(stores: Vec<StoreName>, default: Option<StoreName>) -> Self {
        let stores = if stores.is_empty() {
            KNOWN_STORES.iter().copied().map(StoreName::from).collect()
        } else {
            stores
        };

        let default = default
            .filter(|d| stores.contains(d))
            .unwrap_or_else(|| stores[0].clone());

        Self { stores, default }
    }

    pub fn stores(&self) -> &[StoreName] {
        &self.stores
    }

    pub fn default_store(&self) -> &StoreName {
        &self.default
    }

    /// Look up a store by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&StoreName> {
        self.stores
            .iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for StoreDirectory {
    fn default() -> Self {
        Self::new(Vec::new(), Some(StoreName::from(DEFAULT_STORE)))
    }
}
