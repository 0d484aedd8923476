//! Session Status
//!
//! Three-state view of the authentication provider's session.

use crate::user::{Role, UserStatus};

/// Authentication state as seen by the front-end
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The provider has not finished loading
    #[default]
    Unresolved,
    SignedOut,
    SignedIn { user_id: String },
}

impl SessionStatus {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        SessionStatus::SignedIn {
            user_id: user_id.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionStatus::Unresolved)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionStatus::SignedIn { .. })
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            SessionStatus::SignedIn { user_id } => Some(user_id),
            _ => None,
        }
    }
}

/// Identity mirrored for the push-notification integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    /// Absent until the role lookup completes
    pub role: Option<Role>,
}

impl SessionIdentity {
    pub fn new(user_id: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Identity for the current session, if someone is signed in
    pub fn from_session(status: &SessionStatus, role: Option<Role>) -> Option<Self> {
        status.user_id().map(|id| Self::new(id, role))
    }

    /// Identity from a completed role lookup. A banned user's role is withheld.
    pub fn from_lookup(status: &SessionStatus, lookup: Option<&UserStatus>) -> Option<Self> {
        let role = lookup.filter(|user| !user.banned).map(|user| user.role);
        Self::from_session(status, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unresolved() {
        let status = SessionStatus::default();
        assert!(!status.is_resolved());
        assert!(!status.is_signed_in());
        assert_eq!(status.user_id(), None);
    }

    #[test]
    fn test_identity_from_session() {
        let signed_in = SessionStatus::signed_in("user_2abc");
        let identity = SessionIdentity::from_session(&signed_in, Some(Role::Admin)).unwrap();
        assert_eq!(identity.user_id, "user_2abc");
        assert_eq!(identity.role, Some(Role::Admin));

        assert!(SessionIdentity::from_session(&SessionStatus::SignedOut, None).is_none());
    }

    #[test]
    fn test_identity_from_lookup() {
        let signed_in = SessionStatus::signed_in("user_2abc");

        let pending = SessionIdentity::from_lookup(&signed_in, None).unwrap();
        assert_eq!(pending.role, None);

        let admin = UserStatus::new(Role::Admin);
        let identity = SessionIdentity::from_lookup(&signed_in, Some(&admin)).unwrap();
        assert_eq!(identity.role, Some(Role::Admin));

        let banned = UserStatus::new(Role::Admin).banned();
        let identity = SessionIdentity::from_lookup(&signed_in, Some(&banned)).unwrap();
        assert_eq!(identity.user_id, "user_2abc");
        assert_eq!(identity.role, None);

        assert!(SessionIdentity::from_lookup(&SessionStatus::SignedOut, Some(&admin)).is_none());
    }
}
