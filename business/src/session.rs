//! Session cache for the signed-in user.

use std::any::Any;

use estates_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl};

/// Profile of an authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Preferred display string: name, then email, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("guest")
    }
}

/// Result/status of authentication.
#[derive(Debug, Clone, Default)]
pub enum SessionStatus {
    /// No one is signed in.
    #[default]
    SignedOut,
    /// A login or signup request is in flight.
    Authenticating,
    /// Successfully authenticated.
    SignedIn {
        user: User,
        /// Session token for authenticated API calls.
        token: Option<String>,
    },
    /// The last attempt failed with a user-visible message.
    Failed(String),
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::SignedIn { token, .. } => token.as_deref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Compute-shaped cache for the session.
///
/// `compute` is intentionally a no-op so the cache can be read through the
/// normal path while auth transitions stay explicit user actions handled by
/// `LoginCommand` and `SignupCommand`.
#[derive(Debug, Default)]
pub struct SessionCompute {
    pub status: SessionStatus,
}

impl SessionCompute {
    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    pub fn in_flight(&self) -> bool {
        self.status.in_flight()
    }

    pub fn user(&self) -> Option<&User> {
        self.status.user()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    /// A cache that starts out signed in, for harness tests.
    pub fn signed_in(user: User) -> Self {
        Self {
            status: SessionStatus::SignedIn { user, token: None },
        }
    }
}

impl Compute for SessionCompute {
    fn deps(&self) -> ComputeDeps {
        // Updated by commands; no derived dependencies.
        (Vec::new(), Vec::new())
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op.
    }
}

impl State for SessionCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            name: Some("Riley".to_string()),
            email: Some("riley@example.com".to_string()),
        }
    }

    #[test]
    fn test_default_is_signed_out() {
        let session = SessionCompute::default();
        assert!(!session.is_authenticated());
        assert!(!session.in_flight());
        assert!(session.user().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_signed_in_exposes_user() {
        let session = SessionCompute::signed_in(sample_user());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&sample_user()));
        assert!(session.status.token().is_none());
    }

    #[test]
    fn test_authenticating_is_in_flight_only() {
        let status = SessionStatus::Authenticating;
        assert!(status.in_flight());
        assert!(!status.is_authenticated());
        assert!(status.user().is_none());
        assert!(status.error().is_none());
    }

    #[test]
    fn test_failed_exposes_message() {
        let status = SessionStatus::Failed("Invalid email or password".to_string());
        assert!(!status.is_authenticated());
        assert_eq!(status.error(), Some("Invalid email or password"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            name: None,
            email: Some("riley@example.com".to_string()),
        };
        assert_eq!(user.display_name(), "riley@example.com");
        assert_eq!(User::default().display_name(), "guest");
    }

    #[test]
    fn test_token_preserved_when_signed_in() {
        let status = SessionStatus::SignedIn {
            user: sample_user(),
            token: Some("jwt".to_string()),
        };
        assert_eq!(status.token(), Some("jwt"));
    }
}
