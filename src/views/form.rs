use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::models::{
    Order, OrderStatus, Product, ProductStatus, Resource, Supplier, SupplierStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be a whole number")]
    NotAnInteger(&'static str),
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),
}

/// Editable field state of a resource screen.
///
/// Numeric fields are held as entered and only parsed on submit.
pub trait Form: Default + Clone {
    type Record: Resource;

    fn from_record(record: &Self::Record) -> Self;

    /// Request body for create or update
    fn to_body(&self) -> Result<Map<String, Value>, FormError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierForm {
    pub name: String,
    pub country: String,
    pub status: String,
    pub contact_email: String,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            status: SupplierStatus::default().as_str().to_string(),
            contact_email: String::new(),
        }
    }
}

impl Form for SupplierForm {
    type Record = Supplier;

    fn from_record(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            country: supplier.country.clone(),
            status: supplier.status.clone(),
            contact_email: supplier.contact_email.clone(),
        }
    }

    fn to_body(&self) -> Result<Map<String, Value>, FormError> {
        let body = json!({
            "name": required("name", &self.name)?,
            "country": required("country", &self.country)?,
            "status": required("status", &self.status)?,
            "contactEmail": required("contactEmail", &self.contact_email)?,
        });
        Ok(into_map(body))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub supplier_id: String,
    pub stock: String,
    pub status: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
            supplier_id: String::new(),
            stock: String::new(),
            status: ProductStatus::default().as_str().to_string(),
        }
    }
}

impl Form for ProductForm {
    type Record = Product;

    fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            supplier_id: product.supplier_id.clone(),
            stock: product.stock.to_string(),
            status: product.status.clone(),
        }
    }

    fn to_body(&self) -> Result<Map<String, Value>, FormError> {
        let body = json!({
            "name": required("name", &self.name)?,
            "price": decimal("price", &self.price)?,
            "category": required("category", &self.category)?,
            "supplierId": required("supplierId", &self.supplier_id)?,
            "stock": integer("stock", &self.stock)?,
            "status": required("status", &self.status)?,
        });
        Ok(into_map(body))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub product_id: String,
    pub supplier_id: String,
    pub quantity: String,
    pub status: String,
    pub order_date: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            supplier_id: String::new(),
            quantity: String::new(),
            status: OrderStatus::default().as_str().to_string(),
            order_date: String::new(),
        }
    }
}

impl Form for OrderForm {
    type Record = Order;

    fn from_record(order: &Order) -> Self {
        Self {
            product_id: order.product_id.clone(),
            supplier_id: order.supplier_id.clone(),
            quantity: order.quantity.to_string(),
            status: order.status.clone(),
            order_date: order.order_date.clone(),
        }
    }

    fn to_body(&self) -> Result<Map<String, Value>, FormError> {
        let order_date = required("orderDate", &self.order_date)?;
        NaiveDate::parse_from_str(order_date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate("orderDate"))?;

        let body = json!({
            "productId": required("productId", &self.product_id)?,
            "supplierId": required("supplierId", &self.supplier_id)?,
            "quantity": integer("quantity", &self.quantity)?,
            "status": required("status", &self.status)?,
            "orderDate": order_date,
        });
        Ok(into_map(body))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value)
    }
}

fn decimal(field: &'static str, value: &str) -> Result<f64, FormError> {
    required(field, value)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(FormError::NotANumber(field))
}

fn integer(field: &'static str, value: &str) -> Result<i64, FormError> {
    required(field, value)?
        .trim()
        .parse()
        .map_err(|_| FormError::NotAnInteger(field))
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
