//! Product catalog module.
//!
//! Contains listing records, discount presentation, and the store directory.

mod price;
mod product;
mod store;

pub use price::PriceDisplay;
pub use product::{DealType, Product};
pub use store::{filter_category, StoreDirectory, DEFAULT_STORE, FILTER_CATEGORIES, KNOWN_STORES};
