use stockroom_auth::User;

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    RestockProduct,
    CheckLowStock,
    Logout,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewProducts,
        MenuChoice::AddProduct,
        MenuChoice::UpdateProduct,
        MenuChoice::DeleteProduct,
        MenuChoice::RestockProduct,
        MenuChoice::CheckLowStock,
        MenuChoice::Logout,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::ViewProducts),
            "2" => Some(MenuChoice::AddProduct),
            "3" => Some(MenuChoice::UpdateProduct),
            "4" => Some(MenuChoice::DeleteProduct),
            "5" => Some(MenuChoice::RestockProduct),
            "6" => Some(MenuChoice::CheckLowStock),
            "7" => Some(MenuChoice::Logout),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::ViewProducts => 1,
            MenuChoice::AddProduct => 2,
            MenuChoice::UpdateProduct => 3,
            MenuChoice::DeleteProduct => 4,
            MenuChoice::RestockProduct => 5,
            MenuChoice::CheckLowStock => 6,
            MenuChoice::Logout => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewProducts => "View Products",
            MenuChoice::AddProduct => "Add Product",
            MenuChoice::UpdateProduct => "Update Product",
            MenuChoice::DeleteProduct => "Delete Product",
            MenuChoice::RestockProduct => "Restock Product",
            MenuChoice::CheckLowStock => "Check Low Stock",
            MenuChoice::Logout => "Logout",
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(
            self,
            MenuChoice::AddProduct
                | MenuChoice::UpdateProduct
                | MenuChoice::DeleteProduct
                | MenuChoice::RestockProduct
        )
    }

    pub fn visible_to(&self, user: &User) -> bool {
        !self.admin_only() || user.is_admin()
    }
}
