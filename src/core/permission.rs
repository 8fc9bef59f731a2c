//! Permission policy - decides whether a role may take an action on a resource.
//!
//! The policy is a fixed table over closed enums, so adding a role, action or
//! resource is a compile-time change to [`role_allows`]. Untyped callers go
//! through [`is_allowed`], which default-denies anything it cannot parse.

use crate::{
    entities::{Role, User},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The canonical actions a user may take on a resource.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Add a new record
    Create,
    /// View records
    Read,
    /// Change existing records
    Update,
    /// Remove records
    Delete,
}

impl Action {
    /// Every canonical action.
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    /// The lowercase action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| Error::UnknownValue {
                kind: "action",
                value: s.to_string(),
            })
    }
}

/// The screens and record collections guarded by the policy.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Dashboard,
    Courses,
    Students,
    Attendance,
    Performance,
}

impl Resource {
    /// Every resource, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Courses,
        Self::Students,
        Self::Attendance,
        Self::Performance,
    ];

    /// The lowercase resource tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Courses => "courses",
            Self::Students => "students",
            Self::Attendance => "attendance",
            Self::Performance => "performance",
        }
    }

    /// Title used for navigation entries.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Courses => "Courses",
            Self::Students => "Students",
            Self::Attendance => "Attendance",
            Self::Performance => "Performance",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| Error::UnknownValue {
                kind: "resource",
                value: s.to_string(),
            })
    }
}

/// The policy table.
///
/// `resource` is `None` for resources outside [`Resource`]; such resources are
/// never the teacher carve-out, so they fall through to the general rules.
const fn decide(role: Role, action: Option<Action>, resource: Option<Resource>) -> bool {
    match (role, action, resource) {
        (Role::Admin, _, _) => true,
        // Teachers manage students but may not browse the roster.
        (Role::Teacher, Some(Action::Read), Some(Resource::Students)) => false,
        (Role::Teacher, Some(_), _) => true,
        (Role::Student, Some(Action::Read), _) => true,
        (Role::Teacher | Role::Student, _, _) => false,
    }
}

/// Whether `role` may take `action` on `resource`.
#[must_use]
pub const fn role_allows(role: Role, action: Action, resource: Resource) -> bool {
    decide(role, Some(action), Some(resource))
}

/// Whether `user` may take `action` on `resource`.
#[must_use]
pub const fn has_permission(user: &User, action: Action, resource: Resource) -> bool {
    role_allows(user.role, action, resource)
}

/// Untyped permission check for callers holding plain strings.
///
/// Unknown roles are always denied. Admins are allowed any action on any
/// resource, recognised or not. For other roles an unrecognised action is
/// denied and an unrecognised resource is treated like any non-student resource.
#[must_use]
pub fn is_allowed(role: &str, action: &str, resource: &str) -> bool {
    let Ok(role) = role.parse::<Role>() else {
        return false;
    };

    decide(role, action.parse().ok(), resource.parse().ok())
}

/// Returns [`Error::PermissionDenied`] unless `user` may take `action` on `resource`.
pub fn require(user: &User, action: Action, resource: Resource) -> Result<()> {
    if has_permission(user, action, resource) {
        Ok(())
    } else {
        tracing::debug!(
            "Denied {} {} to user {} ({})",
            action,
            resource,
            user.username,
            user.role
        );
        Err(Error::PermissionDenied { action, resource })
    }
}
