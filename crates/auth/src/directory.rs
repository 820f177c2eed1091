//! Static credential table.

use thiserror::Error;

use stockroom_core::{InMemoryStore, Username};

use crate::{Role, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are not distinguished.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Username → user mapping.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: InMemoryStore<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the two stock accounts: `admin`/`admin123` and
    /// `user`/`user123`.
    pub fn with_default_users() -> Self {
        let mut directory = Self::new();
        directory.add_user("admin", "admin123", Role::Admin);
        directory.add_user("user", "user123", Role::User);
        directory
    }

    /// Insert a user, silently replacing any existing account with the same
    /// username.
    pub fn add_user(
        &mut self,
        username: impl Into<Username>,
        password: impl Into<String>,
        role: Role,
    ) {
        let user = User::new(username, password, role);
        if self.users.upsert(user).is_some() {
            tracing::debug!("replaced existing user account");
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Check credentials and return a copy of the matching user.
    ///
    /// No lockout and no attempt counting.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        match self.users.get(&Username::new(username)) {
            Some(user) if user.authenticate(password) => {
                tracing::info!(username = %user.username(), role = %user.role(), "login succeeded");
                Ok(user.clone())
            }
            _ => {
                tracing::warn!(username, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
