//! Products domain module.
//!
//! This crate contains the product record and its update rules, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod patch;
pub mod product;

pub use patch::{ProductField, ProductPatch, UpdatePolicy};
pub use product::{NewProduct, Product};
