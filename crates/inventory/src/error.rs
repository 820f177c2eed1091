use thiserror::Error;

use stockroom_auth::{AuthError, AuthzError};
use stockroom_core::{DomainError, ProductId};

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Service-level failures. None of them is fatal: each leaves the service
/// state exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    #[error("invalid username or password")]
    AuthenticationFailed,

    #[error("product '{0}' not found")]
    NotFound(ProductId),

    #[error("product '{0}' already exists")]
    AlreadyExists(ProductId),

    #[error(transparent)]
    Forbidden(#[from] AuthzError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<AuthError> for InventoryError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::InvalidCredentials => InventoryError::AuthenticationFailed,
        }
    }
}
