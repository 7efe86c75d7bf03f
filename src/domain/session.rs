//! In-memory session.

use crate::domain::role::Role;

/// Session created on a successful login or registration submission.
///
/// Held only in memory; it dies with the process. There is no backend the
/// login number could be verified against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    login_number: String,
    role: Role,
}

impl Session {
    /// Creates a session for a resolved role.
    #[must_use]
    pub fn new(login_number: impl Into<String>, role: Role) -> Self {
        Self {
            login_number: login_number.into(),
            role,
        }
    }

    /// Returns the submitted login number.
    #[must_use]
    pub fn login_number(&self) -> &str {
        &self.login_number
    }

    /// Returns the resolved role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_holds_resolved_role() {
        let session = Session::new("B-111-111", Role::Visitor);
        assert_eq!(session.login_number(), "B-111-111");
        assert_eq!(session.role(), Role::Visitor);
    }
}
