//! `stockroom-auth` — authentication and role-based authorization.
//!
//! This crate is intentionally decoupled from the terminal and from product
//! storage: it knows who a user is and what that user may do.

pub mod authorize;
pub mod directory;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod user;

pub use authorize::{authorize, authorize_operation, AuthzError, OperationAuthorization};
pub use directory::{AuthError, UserDirectory};
pub use permissions::Permission;
pub use roles::Role;
pub use session::Session;
pub use user::User;
