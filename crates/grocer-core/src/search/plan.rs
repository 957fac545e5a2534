//! Which upstream request a search/filter state maps to.

use crate::search::FilterCriteria;

/// The fetch a products listing should issue.
///
/// Free-text search and structured filters are mutually exclusive: any
/// non-blank search text takes the search path.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlan {
    /// Unfiltered "all available products" listing.
    AllAvailable,
    /// Free-text search with the trimmed query.
    Search(String),
    /// Structured filter with normalized criteria.
    Filter(FilterCriteria),
}

impl FetchPlan {
    /// Resolve the plan for the current search text and filter criteria.
    ///
    /// Empty criteria together with empty search text is the same request as
    /// "no filter" and maps to [`FetchPlan::AllAvailable`].
    pub fn resolve(search_text: &str, criteria: &FilterCriteria) -> Self {
        let query = search_text.trim();
        if !query.is_empty() {
            return FetchPlan::Search(query.to_string());
        }

        let criteria = criteria.clone().normalize();
        if criteria.is_empty() {
            FetchPlan::AllAvailable
        } else {
            FetchPlan::Filter(criteria)
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchPlan::AllAvailable => "all_available",
            FetchPlan::Search(_) => "search",
            FetchPlan::Filter(_) => "filter",
        }
    }
}
