//! View state machines for Grocer.
//!
//! Each view owns its results, pager and a [`RequestTracker`]. Actions
//! mutate state synchronously and hand back at most one [`PendingFetch`];
//! the caller runs it against a [`ProductSource`] and passes the [`Fetched`]
//! outcome back to `complete`. Only the latest request of a view is applied.
//!
//! # Example
//!
//! ```rust,ignore
//! use grocer_views::{DealsView, PagingConfig};
//!
//! let mut deals = DealsView::new(&PagingConfig::default());
//! deals.load(&api).await;
//! while deals.next() {}
//! ```

pub mod config;
pub mod deals;
pub mod home;
pub mod pager;
pub mod products;
pub mod snapshot;
pub mod source;
pub mod stores;
pub mod tracker;

pub use config::PagingConfig;
pub use deals::DealsView;
pub use home::HomeView;
pub use pager::{ClientPager, ServerPager};
pub use products::ProductsView;
pub use snapshot::PageSnapshot;
pub use source::{FetchRequest, Fetched, PendingFetch, ProductSource};
pub use stores::StoresView;
pub use tracker::{InFlight, RequestTracker};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        DealsView, HomeView, PageSnapshot, PagingConfig, ProductSource, ProductsView, StoresView,
    };
}
