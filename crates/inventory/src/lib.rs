//! Inventory service module.
//!
//! Owns the user directory and the product catalog for one console session,
//! and enforces role permissions on every product operation.

pub mod config;
pub mod error;
pub mod operation;
pub mod system;

pub use config::InventoryConfig;
pub use error::{InventoryError, InventoryResult};
pub use operation::InventoryOperation;
pub use system::{InventorySystem, LowStockWarning, ProductListing};
