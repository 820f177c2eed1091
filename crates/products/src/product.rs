use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Entity, Price, ProductId};

use crate::patch::{ProductField, ProductPatch, UpdatePolicy};

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock_quantity: i64,
}

impl NewProduct {
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock_quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock_quantity,
        }
    }
}

/// A product record held in the catalog.
///
/// # Invariants
/// - `product_id` never changes; any string, the empty one included, is a
///   valid key.
/// - `price` is finite and non-negative.
/// - `stock_quantity` has no lower bound; restocking with a negative delta
///   can take it below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    product_id: ProductId,
    name: String,
    category: String,
    price: Price,
    stock_quantity: i64,
}

impl Product {
    pub fn create(new: NewProduct) -> DomainResult<Self> {
        let price = Price::new(new.price)?;

        Ok(Self {
            product_id: new.product_id,
            name: new.name,
            category: new.category,
            price,
            stock_quantity: new.stock_quantity,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Add `delta` (possibly negative) to the stock level and return the new
    /// level. Saturates at the `i64` bounds.
    pub fn update_stock(&mut self, delta: i64) -> i64 {
        self.stock_quantity = self.stock_quantity.saturating_add(delta);
        self.stock_quantity
    }

    /// Apply a patch under `policy`, returning the fields that were written.
    ///
    /// A present price is validated before anything is written, so an
    /// invalid price leaves the product untouched.
    pub fn update_details(
        &mut self,
        patch: ProductPatch,
        policy: UpdatePolicy,
    ) -> DomainResult<Vec<ProductField>> {
        let price = match patch.price {
            Some(amount) => Some(Price::new(amount)?).filter(|p| policy.admits_price(*p)),
            None => None,
        };

        let mut written = Vec::new();

        if let Some(name) = patch.name.filter(|n| policy.admits_text(n)) {
            self.name = name;
            written.push(ProductField::Name);
        }
        if let Some(category) = patch.category.filter(|c| policy.admits_text(c)) {
            self.category = category;
            written.push(ProductField::Category);
        }
        if let Some(price) = price {
            self.price = price;
            written.push(ProductField::Price);
        }
        if let Some(quantity) = patch.stock_quantity.filter(|q| policy.admits_quantity(*q)) {
            self.stock_quantity = quantity;
            written.push(ProductField::StockQuantity);
        }

        Ok(written)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Price: {}, Stock: {}",
            self.product_id, self.name, self.category, self.price, self.stock_quantity
        )
    }
}
