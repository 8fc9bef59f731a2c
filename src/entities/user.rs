//! User entity - Identity records for admins, teachers, and students.
//!
//! A user only ever carries an argon2 hash of its password; the plaintext exists
//! solely in seed data and is hashed when the snapshot is built.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The role assigned to a [`User`], which decides what the permission policy allows.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every resource
    Admin,
    /// Manages courses, attendance and grades, but cannot browse the student roster
    Teacher,
    /// Read-only access
    Student,
}

impl Role {
    /// Every role, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Teacher, Self::Student];

    /// The lowercase name used in seed files and permission checks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownValue {
                kind: "role",
                value: s.to_string(),
            })
    }
}

/// An authenticated identity. Students additionally have a [`Student`](super::Student)
/// record pointing back at this user by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Login name, matched exactly
    pub username: String,
    /// Contact email
    pub email: String,
    /// Argon2 PHC string of the user's password
    pub password_hash: String,
    /// Role deciding the permission policy outcome
    pub role: Role,
    /// Display name
    pub full_name: String,
    /// Optional postal address shown on the profile card
    pub address: Option<String>,
}

impl User {
    /// Whether this user has the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() -> Result<()> {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>()?, role);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = "guest".parse::<Role>();
        assert!(matches!(
            result,
            Err(Error::UnknownValue { kind: "role", .. })
        ));
    }

    #[test]
    fn test_role_parsing_is_case_sensitive() {
        assert!("Admin".parse::<Role>().is_err());
    }
}
