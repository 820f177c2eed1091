use stockroom_auth::{OperationAuthorization, Permission};

/// Product operations exposed by [`crate::InventorySystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryOperation {
    ViewProducts,
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    RestockProduct,
    LowStockWarning,
}

impl InventoryOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryOperation::ViewProducts => "view_products",
            InventoryOperation::AddProduct => "add_product",
            InventoryOperation::UpdateProduct => "update_product",
            InventoryOperation::DeleteProduct => "delete_product",
            InventoryOperation::RestockProduct => "restock_product",
            InventoryOperation::LowStockWarning => "low_stock_warning",
        }
    }
}

impl OperationAuthorization for InventoryOperation {
    fn required_permission(&self) -> Permission {
        match self {
            InventoryOperation::ViewProducts => Permission::ProductsRead,
            InventoryOperation::AddProduct
            | InventoryOperation::UpdateProduct
            | InventoryOperation::DeleteProduct => Permission::ProductsWrite,
            InventoryOperation::RestockProduct => Permission::StockWrite,
            InventoryOperation::LowStockWarning => Permission::StockRead,
        }
    }
}

impl core::fmt::Display for InventoryOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
