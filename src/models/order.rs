use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Collection, Resource, i64_field, str_field};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::Shipped, Self::Delivered];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Weak reference to a product
    pub product_id: String,
    /// Weak reference to a supplier
    pub supplier_id: String,
    pub quantity: i64,
    pub status: String,
    /// Calendar date as entered, e.g. "2024-03-01"
    pub order_date: String,
}

impl Resource for Order {
    const COLLECTION: Collection = Collection::Orders;

    fn from_json(json: &Value) -> Self {
        Self {
            id: str_field(json, "id"),
            product_id: str_field(json, "productId"),
            supplier_id: str_field(json, "supplierId"),
            quantity: i64_field(json, "quantity"),
            status: str_field(json, "status"),
            order_date: str_field(json, "orderDate"),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
