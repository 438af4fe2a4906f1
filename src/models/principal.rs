//! The caller identity passed into authorized operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Store manager; same scheduling rights as an admin.
    Manager,
    /// Regular staff member.
    Employee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Manager => write!(f, "manager"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The authenticated user performing an operation.
///
/// Passed explicitly to every operation that needs an authorization check
/// instead of being read from ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The user's ID.
    pub id: String,
    /// The user's role.
    pub role: Role,
}

impl Principal {
    /// Creates a principal.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("Manager".parse::<Role>(), Ok(Role::Manager));
        assert_eq!(" ADMIN ".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("employee".parse::<Role>(), Ok(Role::Employee));
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_round_trips() {
        for role in [Role::Admin, Role::Manager, Role::Employee] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }
}
