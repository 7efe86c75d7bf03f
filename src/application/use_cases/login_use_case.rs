//! Login workflow.

use tracing::{debug, info, warn};

use crate::domain::{AccessError, Role, Session};

/// Resolves a submitted login number into a session.
///
/// There is no backend to check credentials against; the login number alone
/// decides the role.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginUseCase;

impl LoginUseCase {
    /// Creates the use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes the login submission.
    ///
    /// # Errors
    /// Returns [`AccessError`] if the login number resolves to no role.
    pub fn execute(&self, login_number: &str) -> Result<Session, AccessError> {
        debug!("Resolving login number");

        let role = Role::resolve_login(login_number).map_err(|e| {
            warn!(error = %e, "Login rejected");
            e
        })?;

        info!(role = %role, "Login resolved");
        Ok(Session::new(login_number, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_builds_session() {
        let session = LoginUseCase::new().execute("B-111-111").unwrap();
        assert_eq!(session.role(), Role::Visitor);
        assert_eq!(session.login_number(), "B-111-111");
    }

    #[test]
    fn test_login_rejects_unknown_number() {
        assert!(LoginUseCase::new().execute("1-000-000").is_err());
    }
}
