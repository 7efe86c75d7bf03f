//! Registration workflow.

use tracing::{debug, info, warn};

use crate::domain::{AccessError, Role, Session};

/// Resolves a registration submission into a session.
///
/// Registration uses the case-sensitive resolution rule, unlike login.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterUseCase;

impl RegisterUseCase {
    /// Creates the use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes the registration submission.
    ///
    /// # Errors
    /// Returns [`AccessError`] if the login number resolves to no role.
    pub fn execute(&self, login_number: &str) -> Result<Session, AccessError> {
        debug!("Resolving registration number");

        let role = Role::resolve_registration(login_number).map_err(|e| {
            warn!(error = %e, "Registration rejected");
            e
        })?;

        info!(role = %role, "Registration resolved");
        Ok(Session::new(login_number, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_builds_session() {
        let session = RegisterUseCase::new().execute("V-222-222").unwrap();
        assert_eq!(session.role(), Role::Vendor);
    }

    #[test]
    fn test_registration_requires_uppercase_marker() {
        assert!(RegisterUseCase::new().execute("v-222-222").is_err());
    }
}
