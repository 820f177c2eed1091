use thiserror::Error;

use crate::{Permission, Role, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' lacks permission '{permission}'")]
    Forbidden { role: Role, permission: Permission },
}

/// Operation-side authorization contract.
///
/// Implement this on operations that require a permission; the service
/// checks it before touching any state.
pub trait OperationAuthorization {
    fn required_permission(&self) -> Permission;
}

/// Authorize a user for a single permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(user: &User, required: Permission) -> Result<(), AuthzError> {
    if user.can(required) {
        Ok(())
    } else {
        tracing::warn!(
            username = %user.username(),
            role = %user.role(),
            permission = %required,
            "permission denied"
        );
        Err(AuthzError::Forbidden {
            role: user.role(),
            permission: required,
        })
    }
}

/// Authorize a user for a named operation.
///
/// Denials are logged with the operation name as well as the permission.
pub fn authorize_operation<O>(user: &User, operation: &O) -> Result<(), AuthzError>
where
    O: OperationAuthorization + core::fmt::Display,
{
    authorize(user, operation.required_permission()).inspect_err(|_| {
        tracing::warn!(
            username = %user.username(),
            operation = %operation,
            "operation denied"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Restock;

    impl OperationAuthorization for Restock {
        fn required_permission(&self) -> Permission {
            Permission::StockWrite
        }
    }

    impl core::fmt::Display for Restock {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("restock")
        }
    }

    #[test]
    fn admin_passes_every_check() {
        let admin = User::new("admin", "admin123", Role::Admin);
        for permission in Permission::ALL {
            assert!(authorize(&admin, *permission).is_ok());
        }
        assert!(authorize_operation(&admin, &Restock).is_ok());
    }

    #[test]
    fn user_is_denied_writes() {
        let user = User::new("user", "user123", Role::User);
        let err = authorize_operation(&user, &Restock).unwrap_err();
        assert_eq!(
            err,
            AuthzError::Forbidden {
                role: Role::User,
                permission: Permission::StockWrite,
            }
        );
        assert!(err.to_string().contains("stock.write"));
        assert!(authorize(&user, Permission::ProductsRead).is_ok());
    }
}
