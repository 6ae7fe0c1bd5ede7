pub mod collection;
pub mod order;
pub mod product;
pub mod reference;
pub mod supplier;

pub use collection::Collection;
pub use order::{Order, OrderStatus};
pub use product::{CATEGORY_SUGGESTIONS, Product, ProductStatus};
pub use reference::{Lookup, References, Resolved};
pub use supplier::{Supplier, SupplierStatus};

use serde_json::Value;

/// A record type stored in one of the collections.
///
/// Documents are loosely typed, so decoding never fails: missing or mistyped
/// fields decode to empty values.
pub trait Resource: Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn from_json(json: &Value) -> Self;

    fn id(&self) -> &str;
}

pub(crate) fn str_field(json: &Value, key: &str) -> String {
    json.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

pub(crate) fn f64_field(json: &Value, key: &str) -> f64 {
    match json.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub(crate) fn i64_field(json: &Value, key: &str) -> i64 {
    match json.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_fields_accept_numbers_and_numeric_strings() {
        let json = json!({ "price": "12.5", "stock": 7, "quantity": 3.9, "bad": "x" });

        assert_eq!(f64_field(&json, "price"), 12.5);
        assert_eq!(i64_field(&json, "stock"), 7);
        assert_eq!(i64_field(&json, "quantity"), 3);
        assert_eq!(i64_field(&json, "bad"), 0);
        assert_eq!(f64_field(&json, "missing"), 0.0);
    }

    #[test]
    fn missing_string_field_is_empty() {
        assert_eq!(str_field(&json!({ "name": 5 }), "name"), "");
    }
}
