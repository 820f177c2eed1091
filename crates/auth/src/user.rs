//! User entity for console authentication.
//!
//! Passwords are stored and compared as plaintext. That is a known security
//! gap of this tool: nothing here is fit for credentials that matter.

use stockroom_core::{Entity, Username};

use crate::{Permission, Role};

/// An account that can log in to the console.
///
/// Users are created once (seeding) and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    username: Username,
    password: String,
    role: Role,
}

impl User {
    pub fn new(username: impl Into<Username>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.role.grants(permission)
    }

    /// Exact, case-sensitive comparison with the stored password.
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl Entity for User {
    type Id = Username;

    fn id(&self) -> &Self::Id {
        &self.username
    }
}

impl core::fmt::Debug for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_requires_exact_match() {
        let user = User::new("admin", "admin123", Role::Admin);
        assert!(user.authenticate("admin123"));
        assert!(!user.authenticate("ADMIN123"));
        assert!(!user.authenticate("admin123 "));
        assert!(!user.authenticate(""));
    }

    #[test]
    fn debug_output_hides_password() {
        let user = User::new("user", "user123", Role::User);
        let rendered = format!("{user:?}");
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("user123"));
    }

    #[test]
    fn role_drives_capabilities() {
        let admin = User::new("admin", "x", Role::Admin);
        let user = User::new("user", "x", Role::User);
        assert!(admin.is_admin());
        assert!(!user.is_admin());
        assert!(admin.can(Permission::StockWrite));
        assert!(!user.can(Permission::StockWrite));
    }
}
