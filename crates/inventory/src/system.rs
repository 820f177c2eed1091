//! The inventory management service.

use serde::Serialize;

use stockroom_auth::{authorize_operation, Role, User, UserDirectory};
use stockroom_core::{InMemoryStore, ProductId, Username};
use stockroom_products::{NewProduct, Product, ProductField, ProductPatch};

use crate::config::InventoryConfig;
use crate::error::{InventoryError, InventoryResult};
use crate::operation::InventoryOperation;

/// Result of [`InventorySystem::view_products`].
///
/// `Empty` means the catalog itself holds nothing, regardless of filtering;
/// a non-empty catalog whose products are all filtered out yields
/// `Products(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListing<'a> {
    Empty,
    Products(Vec<&'a Product>),
}

impl<'a> ProductListing<'a> {
    pub fn products(&self) -> &[&'a Product] {
        match self {
            ProductListing::Empty => &[],
            ProductListing::Products(products) => products,
        }
    }
}

/// One product reported by [`InventorySystem::low_stock_warning`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockWarning {
    pub product_id: ProductId,
    pub name: String,
    pub stock_quantity: i64,
}

impl core::fmt::Display for LowStockWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Low stock warning: {} (ID: {}) has only {} items left.",
            self.name, self.product_id, self.stock_quantity
        )
    }
}

/// Owns the credential table and the product catalog.
///
/// Every product operation takes the acting user and checks the role's
/// permission before reading or mutating anything. A failed call never
/// changes state.
#[derive(Debug, Default)]
pub struct InventorySystem {
    users: UserDirectory,
    products: InMemoryStore<Product>,
    config: InventoryConfig,
}

impl InventorySystem {
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            users: UserDirectory::new(),
            products: InMemoryStore::new(),
            config,
        }
    }

    /// Service seeded with `admin`/`admin123` (Admin) and `user`/`user123` (User).
    pub fn with_default_users(config: InventoryConfig) -> Self {
        Self {
            users: UserDirectory::with_default_users(),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn user_count(&self) -> usize {
        self.users.user_count()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.get(product_id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────

    /// Insert or silently overwrite a user account.
    pub fn add_user(
        &mut self,
        username: impl Into<Username>,
        password: impl Into<String>,
        role: Role,
    ) {
        self.users.add_user(username, password, role);
    }

    pub fn login(&self, username: &str, password: &str) -> InventoryResult<User> {
        Ok(self.users.login(username, password)?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Products
    // ─────────────────────────────────────────────────────────────────────

    pub fn add_product(&mut self, actor: &User, new: NewProduct) -> InventoryResult<()> {
        authorize_operation(actor, &InventoryOperation::AddProduct)?;

        if self.products.contains(&new.product_id) {
            tracing::info!(product_id = %new.product_id, "rejected duplicate product id");
            return Err(InventoryError::AlreadyExists(new.product_id));
        }

        let product = Product::create(new)?;
        tracing::info!(
            product_id = %product.product_id(),
            stock = product.stock_quantity(),
            actor = %actor.username(),
            "product added"
        );
        self.products.upsert(product);
        Ok(())
    }

    /// Apply `patch` with the configured update policy, returning the fields
    /// that were written.
    pub fn update_product(
        &mut self,
        actor: &User,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> InventoryResult<Vec<ProductField>> {
        authorize_operation(actor, &InventoryOperation::UpdateProduct)?;

        let policy = self.config.update_policy;
        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(|| InventoryError::NotFound(product_id.clone()))?;

        let written = product.update_details(patch, policy)?;
        tracing::info!(
            product_id = %product_id,
            fields = ?written,
            actor = %actor.username(),
            "product updated"
        );
        Ok(written)
    }

    /// Remove a product and hand back the removed record.
    pub fn delete_product(&mut self, actor: &User, product_id: &ProductId) -> InventoryResult<Product> {
        authorize_operation(actor, &InventoryOperation::DeleteProduct)?;

        let removed = self
            .products
            .remove(product_id)
            .ok_or_else(|| InventoryError::NotFound(product_id.clone()))?;

        tracing::info!(product_id = %product_id, actor = %actor.username(), "product deleted");
        Ok(removed)
    }

    /// Products in insertion order.
    ///
    /// With `filter_stock`, products whose stock is strictly above the
    /// low-stock threshold are skipped.
    pub fn view_products(&self, actor: &User, filter_stock: bool) -> InventoryResult<ProductListing<'_>> {
        authorize_operation(actor, &InventoryOperation::ViewProducts)?;

        if self.products.is_empty() {
            return Ok(ProductListing::Empty);
        }

        let products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| !filter_stock || self.config.shown_in_stock_filter(p.stock_quantity()))
            .collect();

        tracing::debug!(filter_stock, shown = products.len(), "listed products");
        Ok(ProductListing::Products(products))
    }

    /// Add `quantity` (any sign) to a product's stock and return the new level.
    pub fn restock_product(
        &mut self,
        actor: &User,
        product_id: &ProductId,
        quantity: i64,
    ) -> InventoryResult<i64> {
        authorize_operation(actor, &InventoryOperation::RestockProduct)?;

        let product = self
            .products
            .get_mut(product_id)
            .ok_or_else(|| InventoryError::NotFound(product_id.clone()))?;

        let stock = product.update_stock(quantity);
        tracing::info!(
            product_id = %product_id,
            delta = quantity,
            stock,
            actor = %actor.username(),
            "product restocked"
        );
        Ok(stock)
    }

    /// One warning per product strictly below the low-stock threshold, in
    /// insertion order. An empty result means nothing is low.
    pub fn low_stock_warning(&self, actor: &User) -> InventoryResult<Vec<LowStockWarning>> {
        authorize_operation(actor, &InventoryOperation::LowStockWarning)?;

        let warnings: Vec<LowStockWarning> = self
            .products
            .iter()
            .filter(|p| self.config.is_low_stock(p.stock_quantity()))
            .map(|p| LowStockWarning {
                product_id: p.product_id().clone(),
                name: p.name().to_string(),
                stock_quantity: p.stock_quantity(),
            })
            .collect();

        if !warnings.is_empty() {
            tracing::warn!(
                count = warnings.len(),
                threshold = self.config.low_stock_threshold,
                "products below low-stock threshold"
            );
        }
        Ok(warnings)
    }
}
