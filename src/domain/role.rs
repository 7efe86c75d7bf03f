//! Role resolution from login numbers.

use std::fmt;

use crate::domain::errors::AccessError;

/// User role derived from a login number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Festival administration.
    Admin,
    /// Stand operator ("Verkäufer").
    Vendor,
    /// Festival visitor ("Besucher").
    Visitor,
}

impl Role {
    /// German label as shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Vendor => "Verkäufer",
            Self::Visitor => "Besucher",
        }
    }

    /// Resolves a role on the login path.
    ///
    /// The lower-cased login number is scanned for "a", then "v", then "b";
    /// the first hit wins. Anything else is rejected.
    ///
    /// # Errors
    /// Returns [`AccessError::UnknownLoginNumber`] if none of the letters match.
    pub fn resolve_login(login_number: &str) -> Result<Self, AccessError> {
        let lowered = login_number.to_lowercase();
        if lowered.contains('a') {
            Ok(Self::Admin)
        } else if lowered.contains('v') {
            Ok(Self::Vendor)
        } else if lowered.contains('b') {
            Ok(Self::Visitor)
        } else {
            Err(AccessError::unknown(login_number))
        }
    }

    /// Resolves a role on the registration path.
    ///
    /// Unlike login, registration matches case-sensitively on "A", "V", "B",
    /// with the same precedence.
    ///
    /// # Errors
    /// Returns [`AccessError::UnknownLoginNumber`] if none of the letters match.
    pub fn resolve_registration(login_number: &str) -> Result<Self, AccessError> {
        if login_number.contains('A') {
            Ok(Self::Admin)
        } else if login_number.contains('V') {
            Ok(Self::Vendor)
        } else if login_number.contains('B') {
            Ok(Self::Visitor)
        } else {
            Err(AccessError::unknown(login_number))
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("A-000-000", Role::Admin ; "admin number")]
    #[test_case("V-222-222", Role::Vendor ; "vendor number")]
    #[test_case("B-111-111", Role::Visitor ; "visitor number")]
    #[test_case("a-000-000", Role::Admin ; "lowercase admin")]
    #[test_case("b-111-111", Role::Visitor ; "lowercase visitor")]
    #[test_case("xavb", Role::Admin ; "a beats v and b")]
    #[test_case("xvb", Role::Vendor ; "v beats b")]
    fn login_resolution(login_number: &str, expected: Role) {
        assert_eq!(Role::resolve_login(login_number), Ok(expected));
    }

    #[test_case("A-000-000", Role::Admin ; "admin number")]
    #[test_case("V-222-222", Role::Vendor ; "vendor number")]
    #[test_case("B-111-111", Role::Visitor ; "visitor number")]
    #[test_case("AVB", Role::Admin ; "a beats v and b")]
    fn registration_resolution(login_number: &str, expected: Role) {
        assert_eq!(Role::resolve_registration(login_number), Ok(expected));
    }

    #[test_case("1-000-000" ; "digits only")]
    #[test_case("" ; "empty")]
    #[test_case("xyz" ; "no marker letter")]
    fn login_rejects_unknown_numbers(login_number: &str) {
        assert!(Role::resolve_login(login_number).is_err());
    }

    #[test]
    fn registration_is_case_sensitive() {
        assert!(Role::resolve_registration("b-111-111").is_err());
        assert_eq!(Role::resolve_login("b-111-111"), Ok(Role::Visitor));
    }

    #[test]
    fn labels_are_german() {
        assert_eq!(Role::Vendor.label(), "Verkäufer");
        assert_eq!(Role::Visitor.to_string(), "Besucher");
    }
}
