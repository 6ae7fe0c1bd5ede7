use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Collection, Resource, f64_field, i64_field, str_field};

/// Categories offered by the product form. The field itself is free-form.
pub const CATEGORY_SUGGESTIONS: [&str; 4] = ["Electronics", "Furniture", "Clothing", "Groceries"];

/// Availability chosen by the user. It is not derived from the stock count,
/// so a product may be "Out of Stock" while holding stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Available,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Available, Self::LowStock, Self::OutOfStock];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    /// Weak reference to a supplier
    pub supplier_id: String,
    pub stock: i64,
    pub status: String,
}

impl Product {
    /// price × stock
    pub fn inventory_value(&self) -> f64 {
        self.price * self.stock as f64
    }
}

impl Resource for Product {
    const COLLECTION: Collection = Collection::Products;

    fn from_json(json: &Value) -> Self {
        Self {
            id: str_field(json, "id"),
            name: str_field(json, "name"),
            price: f64_field(json, "price"),
            category: str_field(json, "category"),
            supplier_id: str_field(json, "supplierId"),
            stock: i64_field(json, "stock"),
            status: str_field(json, "status"),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
