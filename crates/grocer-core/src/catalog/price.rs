//! Discount presentation derived from a product's optional price fields.

use crate::catalog::{DealType, Product};
use serde::Serialize;

/// How a listing's price is presented.
///
/// Built once from the raw record so render sites match on a variant instead
/// of re-checking which optional fields happen to be populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDisplay {
    /// No applicable discount.
    Standard { price: String },
    /// Sale or clearance price below the baseline.
    Sale {
        price: String,
        sale_price: String,
        clearance: bool,
    },
    /// Member price below the baseline.
    Loyalty {
        price: String,
        loyalty_price: String,
    },
}

impl PriceDisplay {
    pub fn from_product(product: &Product) -> Self {
        let price = product.price.clone();
        let Some(deal) = product.deal_type.as_ref() else {
            return PriceDisplay::Standard { price };
        };

        if deal.uses_sale_price() {
            if let Some(sale_price) = discount(&product.price, product.sale_price.as_deref()) {
                return PriceDisplay::Sale {
                    price,
                    sale_price,
                    clearance: *deal == DealType::Clearance,
                };
            }
        } else if deal.uses_loyalty_price() {
            if let Some(loyalty_price) = discount(&product.price, product.loyalty_price.as_deref())
            {
                return PriceDisplay::Loyalty {
                    price,
                    loyalty_price,
                };
            }
        }

        PriceDisplay::Standard { price }
    }

    /// Whether a discount is being shown.
    pub fn is_discounted(&self) -> bool {
        !matches!(self, PriceDisplay::Standard { .. })
    }

    /// Baseline store price.
    pub fn base_price(&self) -> &str {
        match self {
            PriceDisplay::Standard { price }
            | PriceDisplay::Sale { price, .. }
            | PriceDisplay::Loyalty { price, .. } => price,
        }
    }

    /// Price shown prominently. Discounted amounts carry a `$` prefix.
    pub fn current_price(&self) -> String {
        match self {
            PriceDisplay::Standard { price } => price.clone(),
            PriceDisplay::Sale { sale_price, .. } => format!("${}", sale_price),
            PriceDisplay::Loyalty { loyalty_price, .. } => format!("${}", loyalty_price),
        }
    }

    /// Struck-through baseline for discounted listings.
    pub fn was_price(&self) -> Option<&str> {
        match self {
            PriceDisplay::Standard { .. } => None,
            PriceDisplay::Sale { price, .. } | PriceDisplay::Loyalty { price, .. } => Some(price),
        }
    }
}

/// A candidate price only counts as a discount when present, non-blank and
/// different from the baseline.
fn discount(price: &str, candidate: Option<&str>) -> Option<String> {
    candidate
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != price.trim())
        .map(str::to_string)
}
