use chrono::{DateTime, Duration, Utc};

use crate::User;

/// A logged-in console session.
///
/// Exists only between a successful login and logout; there is no
/// persistence and no expiry.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: User) -> Self {
        Self::started_at(user, Utc::now())
    }

    pub fn started_at(user: User, started_at: DateTime<Utc>) -> Self {
        Self { user, started_at }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.started_at
    }

    /// End the session, returning how long it lasted.
    pub fn end(self) -> Duration {
        let duration = self.duration_at(Utc::now());
        tracing::info!(
            username = %self.user.username(),
            seconds = duration.num_seconds(),
            "session ended"
        );
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn duration_is_measured_from_start() {
        let start = Utc::now();
        let session = Session::started_at(User::new("admin", "admin123", Role::Admin), start);
        assert_eq!(
            session.duration_at(start + Duration::seconds(90)).num_seconds(),
            90
        );
        assert!(session.user().is_admin());
    }
}
