//! Search module.
//!
//! Contains filter criteria, fetch-path resolution, and page windows.

mod filter;
mod page;
mod plan;

pub use filter::{FilterCriteria, PriceRange};
pub use page::{PageInfo, PageWindow};
pub use plan::FetchPlan;
