/// The three document collections managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Suppliers,
    Products,
    Orders,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Suppliers, Self::Products, Self::Orders];

    /// Table backing the collection.
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Suppliers => "suppliers",
            Self::Products => "products",
            Self::Orders => "orders",
        }
    }

    /// Route serving the collection.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Suppliers => "/api/suppliers",
            Self::Products => "/api/products",
            Self::Orders => "/api/orders",
        }
    }

    /// Singular name used in response messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Suppliers => "Supplier",
            Self::Products => "Product",
            Self::Orders => "Order",
        }
    }

    /// Create table statement; the document body excludes its id.
    pub fn create_table(self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                body TEXT NOT NULL
            )",
            self.table_name()
        )
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}
