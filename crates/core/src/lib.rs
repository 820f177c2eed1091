//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod store;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, Username};
pub use store::InMemoryStore;
pub use value_object::{Price, ValueObject};
