use serde::Serialize;

use crate::models::{Order, OrderStatus, Product};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

/// Inventory totals over the full product collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    /// Σ price × stock
    pub total_value: f64,
    pub total_stock: i64,
    /// Value per category, highest first
    pub by_category: Vec<CategoryValue>,
}

impl InventorySummary {
    pub fn from_products(products: &[Product]) -> Self {
        let mut by_category: Vec<CategoryValue> = Vec::new();
        let mut total_value = 0.0;
        let mut total_stock: i64 = 0;

        for product in products {
            let value = product.inventory_value();
            total_value += value;
            total_stock = total_stock.saturating_add(product.stock);

            match by_category
                .iter_mut()
                .find(|entry| entry.category == product.category)
            {
                Some(entry) => entry.value += value,
                None => by_category.push(CategoryValue {
                    category: product.category.clone(),
                    value,
                }),
            }
        }

        // Stable: equal values keep first-seen order
        by_category.sort_by(|a, b| b.value.total_cmp(&a.value));

        Self {
            total_value,
            total_stock,
            by_category,
        }
    }

    pub fn top_category(&self) -> Option<&CategoryValue> {
        self.by_category.first()
    }

    /// Name of the top category, "N/A" without products
    pub fn top_category_label(&self) -> &str {
        self.top_category()
            .map(|entry| entry.category.as_str())
            .unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Order count per status. Pending, Shipped and Delivered are always listed
/// first; any other status text found in the data follows in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStatusSummary {
    pub counts: Vec<StatusCount>,
}

impl OrderStatusSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut counts: Vec<StatusCount> = OrderStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.as_str().to_string(),
                count: 0,
            })
            .collect();

        for order in orders {
            match counts.iter_mut().find(|entry| entry.status == order.status) {
                Some(entry) => entry.count += 1,
                None => counts.push(StatusCount {
                    status: order.status.clone(),
                    count: 1,
                }),
            }
        }

        Self { counts }
    }

    pub fn count(&self, status: &str) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }

    pub fn count_of(&self, status: OrderStatus) -> usize {
        self.count(status.as_str())
    }
}
