//! Product listing types as returned by the comparison API.

use crate::catalog::PriceDisplay;
use crate::ids::{ProductId, StoreName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Promotion attached to a listing.
///
/// The upstream enumeration is open: values this client does not know are
/// preserved in [`DealType::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DealType {
    /// Temporary price reduction.
    Sale,
    /// Clearance markdown.
    Clearance,
    /// Price available to loyalty members.
    Loyalty,
    /// Explicitly no promotion.
    None,
    /// Any other upstream value.
    Other(String),
}

impl DealType {
    pub fn as_str(&self) -> &str {
        match self {
            DealType::Sale => "SALE",
            DealType::Clearance => "CLEARANCE",
            DealType::Loyalty => "LOYALTY",
            DealType::None => "NONE",
            DealType::Other(s) => s,
        }
    }

    /// Whether a sale price is meaningful for this deal.
    pub fn uses_sale_price(&self) -> bool {
        matches!(self, DealType::Sale | DealType::Clearance)
    }

    /// Whether a loyalty price is meaningful for this deal.
    pub fn uses_loyalty_price(&self) -> bool {
        matches!(self, DealType::Loyalty)
    }
}

impl From<String> for DealType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "SALE" => DealType::Sale,
            "CLEARANCE" => DealType::Clearance,
            "LOYALTY" => DealType::Loyalty,
            "NONE" => DealType::None,
            _ => DealType::Other(s),
        }
    }
}

impl From<DealType> for String {
    fn from(d: DealType) -> Self {
        match d {
            DealType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One store's listing of an item.
///
/// Read-only: records are replaced wholesale on every fetch. Descriptive
/// fields default to empty so one sparse record cannot sink a whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Upstream identifier, unique within a result set only.
    pub id: ProductId,
    pub product_name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub product_url: String,
    /// Store-displayed baseline price.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    pub store_name: StoreName,
    /// Availability flag as reported by the store.
    pub availability: String,
}

impl Product {
    /// Create a listing with the required identity and price fields.
    pub fn new(
        id: impl Into<ProductId>,
        product_name: impl Into<String>,
        store_name: impl Into<StoreName>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_name: product_name.into(),
            store_name: store_name.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sale(mut self, deal: DealType, sale_price: impl Into<String>) -> Self {
        self.deal_type = Some(deal);
        self.sale_price = Some(sale_price.into());
        self
    }

    pub fn with_loyalty(mut self, loyalty_price: impl Into<String>) -> Self {
        self.deal_type = Some(DealType::Loyalty);
        self.loyalty_price = Some(loyalty_price.into());
        self
    }

    /// Resolve how the price should be presented.
    pub fn price_display(&self) -> PriceDisplay {
        PriceDisplay::from_product(self)
    }

    /// Deal badge to show, if any. `NONE` never produces a badge.
    pub fn deal_badge(&self) -> Option<&DealType> {
        self.deal_type.as_ref().filter(|d| **d != DealType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_type_known_values() {
        assert_eq!(DealType::from("SALE".to_string()), DealType::Sale);
        assert_eq!(DealType::from("CLEARANCE".to_string()), DealType::Clearance);
        assert_eq!(DealType::from("LOYALTY".to_string()), DealType::Loyalty);
        assert_eq!(DealType::from("NONE".to_string()), DealType::None);
    }

    #[test]
    fn test_deal_type_unknown_value_is_preserved() {
        let deal = DealType::from("BOGO".to_string());
        assert_eq!(deal, DealType::Other("BOGO".to_string()));
        assert_eq!(String::from(deal), "BOGO");
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{
            "id": "wm-1",
            "productName": "Sparkling Water",
            "description": "12 pack",
            "category": "Drinks",
            "imageUrl": "https://img.example/wm-1.png",
            "productUrl": "https://walmart.example/wm-1",
            "price": "5.99",
            "salePrice": "4.49",
            "dealType": "SALE",
            "storeName": "Walmart",
            "availability": "IN_STOCK"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "wm-1");
        assert_eq!(product.product_name, "Sparkling Water");
        assert_eq!(product.sale_price.as_deref(), Some("4.49"));
        assert_eq!(product.loyalty_price, None);
        assert_eq!(product.deal_type, Some(DealType::Sale));
        assert_eq!(product.store_name.as_str(), "Walmart");
    }

    #[test]
    fn test_sparse_product_uses_defaults() {
        let product: Product = serde_json::from_str(r#"{"id": "x", "price": "1.00"}"#).unwrap();
        assert_eq!(product.product_name, "");
        assert_eq!(product.deal_type, None);
    }

    #[test]
    fn test_product_serialization_skips_absent_prices() {
        let product = Product::new("p", "Bread", "Metro", "2.50");
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("salePrice").is_none());
        assert!(value.get("dealType").is_none());
        assert_eq!(value["storeName"], "Metro");
    }

    #[test]
    fn test_deal_badge() {
        let none = Product {
            deal_type: Some(DealType::None),
            ..Product::new("a", "A", "Metro", "1.00")
        };
        assert!(none.deal_badge().is_none());

        let absent = Product::new("b", "B", "Metro", "1.00");
        assert!(absent.deal_badge().is_none());

        let sale = Product::new("c", "C", "Metro", "1.00").with_sale(DealType::Sale, "0.80");
        assert_eq!(sale.deal_badge(), Some(&DealType::Sale));
    }
}
