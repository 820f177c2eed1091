use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Rendered as dotted strings (e.g. "products.read") in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// List products.
    ProductsRead,
    /// Add, update or delete products.
    ProductsWrite,
    /// Inspect stock levels (low-stock warnings).
    StockRead,
    /// Change stock levels (restock).
    StockWrite,
}

impl Permission {
    pub const ALL: &'static [Permission] = &[
        Permission::ProductsRead,
        Permission::ProductsWrite,
        Permission::StockRead,
        Permission::StockWrite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ProductsRead => "products.read",
            Permission::ProductsWrite => "products.write",
            Permission::StockRead => "stock.read",
            Permission::StockWrite => "stock.write",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
