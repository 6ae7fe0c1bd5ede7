use crate::models::{Order, Product, References, Supplier};

/// Free-text matching against a record's searchable fields.
///
/// `needle` is already lower-cased by [`filter`].
pub trait Searchable {
    fn matches(&self, needle: &str, refs: &References) -> bool;
}

/// Records matching `query` as a case-insensitive substring, in collection
/// order. An empty query keeps every record.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str, refs: &References) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches(&needle, refs))
        .collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Supplier {
    fn matches(&self, needle: &str, _refs: &References) -> bool {
        contains(&self.name, needle)
            || contains(&self.country, needle)
            || contains(&self.contact_email, needle)
            || contains(&self.status, needle)
    }
}

impl Searchable for Product {
    fn matches(&self, needle: &str, refs: &References) -> bool {
        let supplier = refs.suppliers.resolve(&self.supplier_id).display();

        contains(&self.name, needle)
            || contains(&self.category, needle)
            || contains(supplier, needle)
    }
}

impl Searchable for Order {
    fn matches(&self, needle: &str, refs: &References) -> bool {
        let product = refs.products.resolve(&self.product_id).display();
        let supplier = refs.suppliers.resolve(&self.supplier_id).display();

        contains(product, needle)
            || contains(supplier, needle)
            || contains(&self.status, needle)
            // Plain substring on the stored text, not a date comparison
            || self.order_date.contains(needle)
    }
}
