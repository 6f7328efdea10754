// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roles an identity can hold.
///
/// The set is closed: an identity carries exactly one of these, and a route's
/// role requirement is an exact match against it. There is no hierarchy;
/// `Admin` does not satisfy a route that requires `User` or `Teacher`.
///
/// Serialized spellings ("Admin", "Teacher", "User") are the spellings
/// embedded in token claims, so an unknown role string in a token fails
/// deserialization instead of falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Administrative access where a route grants it
    Admin,
    /// Teaching staff
    Teacher,
    /// Regular user
    User,
}

impl Role {
    /// Parse a role from its name (case-insensitive).
    /// Used when seeding identities from the environment.
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Teacher => write!(f, "Teacher"),
            Role::User => write!(f, "User"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_known_roles() {
        assert_eq!(Role::from_str("Admin"), Some(Role::Admin));
        assert_eq!(Role::from_str("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_str("teacher"), Some(Role::Teacher));
        assert_eq!(Role::from_str("User"), Some(Role::User));
    }

    #[test]
    fn from_str_rejects_unknown_roles() {
        assert_eq!(Role::from_str("Superuser"), None);
        assert_eq!(Role::from_str(""), None);
    }

    #[test]
    fn serde_uses_exact_spellings() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""Admin""#);
        assert_eq!(
            serde_json::from_str::<Role>(r#""Teacher""#).unwrap(),
            Role::Teacher
        );
        // Spelling is part of the token contract; a near-miss is not a role.
        assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
        assert!(serde_json::from_str::<Role>(r#""Principal""#).is_err());
    }

    #[test]
    fn display_matches_serialized_spelling() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Role::Teacher.to_string(), "Teacher");
        assert_eq!(Role::User.to_string(), "User");
    }
}
