//! Grocery price-comparison domain types and paging logic for Grocer.
//!
//! This crate is pure and synchronous:
//!
//! - **Catalog**: product listings, deal types, price presentation, stores
//! - **Search**: filter criteria normalization, fetch-path resolution, page windows
//! - **Route**: bookmarkable view locations
//!
//! # Example
//!
//! ```rust
//! use grocer_core::prelude::*;
//!
//! let deals: Vec<Product> = (0..37)
//!     .map(|i| Product::new(format!("p-{i}"), "Item", "Metro", "1.99"))
//!     .collect();
//!
//! let window = PageWindow::compute(&deals, 2, 15);
//! assert_eq!(window.len(), 7);
//! assert!(!window.has_next());
//!
//! let plan = FetchPlan::resolve("", &FilterCriteria::new().sale_only(false));
//! assert_eq!(plan, FetchPlan::AllAvailable);
//! ```

pub mod ids;
pub mod route;

pub mod catalog;
pub mod search;

pub use ids::*;
pub use route::Route;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::route::Route;

    // Catalog
    pub use crate::catalog::{
        DealType, PriceDisplay, Product, StoreDirectory, DEFAULT_STORE, FILTER_CATEGORIES,
        KNOWN_STORES,
    };

    // Search
    pub use crate::search::{FetchPlan, FilterCriteria, PageInfo, PageWindow, PriceRange};
}
