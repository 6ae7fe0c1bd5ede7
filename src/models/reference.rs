use std::collections::HashMap;

use super::{Product, Supplier};

/// Text shown for a reference whose target doesn't exist.
pub const UNRESOLVED_NAME: &str = "Unknown";

/// Outcome of following a weak reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Named(&'a str),
    Unresolved,
}

impl<'a> Resolved<'a> {
    /// Name to display and search on. A blank name shows as unresolved text.
    pub fn display(self) -> &'a str {
        match self {
            Resolved::Named(name) if !name.is_empty() => name,
            Resolved::Named(_) | Resolved::Unresolved => UNRESOLVED_NAME,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Resolved::Named(_))
    }
}

/// Id → name index over a companion collection.
///
/// References are never owned: the lookup only reflects what was fetched, and
/// ids pointing at deleted or unknown records resolve to `Unresolved`.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    names: HashMap<String, String>,
}

impl Lookup {
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut names = HashMap::new();
        for (id, name) in entries {
            // First record wins, as a linear find would
            names
                .entry(id.to_string())
                .or_insert_with(|| name.to_string());
        }
        Self { names }
    }

    pub fn suppliers(suppliers: &[Supplier]) -> Self {
        Self::new(suppliers.iter().map(|s| (s.id.as_str(), s.name.as_str())))
    }

    pub fn products(products: &[Product]) -> Self {
        Self::new(products.iter().map(|p| (p.id.as_str(), p.name.as_str())))
    }

    pub fn resolve(&self, id: &str) -> Resolved<'_> {
        match self.names.get(id) {
            Some(name) => Resolved::Named(name),
            None => Resolved::Unresolved,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Companion collections a page resolves references against.
#[derive(Debug, Clone, Default)]
pub struct References {
    pub suppliers: Lookup,
    pub products: Lookup,
}
