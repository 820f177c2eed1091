//! Partial product updates.

use serde::{Deserialize, Serialize};

use stockroom_core::Price;

/// How a [`ProductPatch`] decides which present fields to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Write a field only when the value is present *and* non-empty/non-zero.
    ///
    /// `Some(0)` stock, `Some(0.0)` price and `Some("")` text are ignored, so
    /// this policy cannot zero a numeric field.
    #[default]
    SkipFalsy,
    /// Write every present field as given, zero and empty values included.
    Explicit,
}

impl UpdatePolicy {
    pub(crate) fn admits_text(self, value: &str) -> bool {
        match self {
            UpdatePolicy::SkipFalsy => !value.is_empty(),
            UpdatePolicy::Explicit => true,
        }
    }

    pub(crate) fn admits_price(self, price: Price) -> bool {
        match self {
            UpdatePolicy::SkipFalsy => !price.is_zero(),
            UpdatePolicy::Explicit => true,
        }
    }

    pub(crate) fn admits_quantity(self, value: i64) -> bool {
        match self {
            UpdatePolicy::SkipFalsy => value != 0,
            UpdatePolicy::Explicit => true,
        }
    }
}

/// Optional replacement values for a product's details.
///
/// `None` always means "leave unchanged"; what a present value means depends
/// on the [`UpdatePolicy`] it is applied with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i64>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i64) -> Self {
        self.stock_quantity = Some(stock_quantity);
        self
    }
}

/// A product attribute written by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    Category,
    Price,
    StockQuantity,
}
