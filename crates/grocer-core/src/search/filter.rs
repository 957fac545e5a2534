//! Structured filter criteria for the compare endpoint.

use crate::ids::StoreName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Price bounds as `[min, max]`. A bound of zero means "unbounded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange(pub f64, pub f64);

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self(min, max)
    }

    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }

    /// A range constrains results only when some bound is positive.
    pub fn is_constraining(&self) -> bool {
        self.0 > 0.0 || self.1 > 0.0
    }

    /// Replace the lower bound, keeping the upper one.
    pub fn with_min(self, min: f64) -> Self {
        Self(min, self.1)
    }

    /// Replace the upper bound, keeping the lower one.
    pub fn with_max(self, max: f64) -> Self {
        Self(self.0, max)
    }
}

/// Structured filter criteria.
///
/// Edits arrive as whole values; [`FilterCriteria::normalize`] reduces one to
/// the minimal request body before it is sent. The serialized form is the
/// compare endpoint's JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub stores: BTreeSet<StoreName>,
    /// Opt-in: only in-stock listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    /// Opt-in: only listings on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_only: Option<bool>,
}

impl FilterCriteria {
    /// Empty criteria.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn with_store(mut self, store: impl Into<StoreName>) -> Self {
        self.stores.insert(store.into());
        self
    }

    pub fn in_stock_only(mut self, on: bool) -> Self {
        self.availability = Some(on);
        self
    }

    pub fn sale_only(mut self, on: bool) -> Self {
        self.sale_only = Some(on);
        self
    }

    /// Drop every field that carries no constraint.
    ///
    /// Blank categories, non-positive price ranges and empty store sets are
    /// removed; the boolean filters survive only when set to `true`, since
    /// their absence already means "no constraint".
    pub fn normalize(self) -> Self {
        Self {
            category: self
                .category
                .filter(|c| !c.trim().is_empty()),
            price_range: self.price_range.filter(PriceRange::is_constraining),
            stores: self
                .stores
                .into_iter()
                .filter(|s| !s.as_str().trim().is_empty())
                .collect(),
            availability: self.availability.filter(|on| *on),
            sale_only: self.sale_only.filter(|on| *on),
        }
    }

    /// True when no field constrains results.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.price_range.is_none()
            && self.stores.is_empty()
            && self.availability.is_none()
            && self.sale_only.is_none()
    }

    /// Request body for the unfiltered "all available products" listing.
    pub fn all_available() -> Self {
        Self {
            availability: Some(true),
            ..Self::default()
        }
    }
}
