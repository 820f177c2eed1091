use serde::{Deserialize, Serialize};

use stockroom_products::UpdatePolicy;

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Tunables for the inventory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Boundary for low-stock reporting.
    pub low_stock_threshold: i64,
    /// How `update_product` treats zero/empty values.
    pub update_policy: UpdatePolicy,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl InventoryConfig {
    /// Low-stock warning rule: strictly below the threshold.
    pub fn is_low_stock(&self, stock_quantity: i64) -> bool {
        stock_quantity < self.low_stock_threshold
    }

    /// Filtered-listing rule: hidden only when strictly above the threshold.
    ///
    /// NOTE: this admits `stock == threshold`, which the warning rule does
    /// not flag. The two boundaries are intentionally left as they are.
    pub fn shown_in_stock_filter(&self, stock_quantity: i64) -> bool {
        stock_quantity <= self.low_stock_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_differ_at_threshold() {
        let config = InventoryConfig::default();
        assert!(config.is_low_stock(4));
        assert!(!config.is_low_stock(5));
        assert!(config.shown_in_stock_filter(5));
        assert!(!config.shown_in_stock_filter(6));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: InventoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InventoryConfig::default());

        let config: InventoryConfig =
            serde_json::from_str(r#"{"low_stock_threshold": 2, "update_policy": "explicit"}"#)
                .unwrap();
        assert_eq!(config.low_stock_threshold, 2);
        assert_eq!(config.update_policy, UpdatePolicy::Explicit);
    }
}
