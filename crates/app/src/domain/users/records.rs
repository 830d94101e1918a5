//! User Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use setlist::uuids::TypedUuid;
use thiserror::Error;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// Error returned when a role name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// What a user is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Browses schedules and manages their own cart.
    Public,

    /// Can also manage event schedules.
    Admin,
}

impl Role {
    /// Stored name of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Admin => "admin",
        }
    }

    /// Whether this role can manage schedules.
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "public" => Ok(Self::Public),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user identifier.
    pub uuid: UserUuid,

    /// Display name.
    pub name: String,

    /// Access role.
    pub role: Role,

    /// Creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,

    /// Soft-delete timestamp when deleted.
    pub deleted_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn role_parses_stored_names() -> TestResult {
        assert_eq!("public".parse::<Role>()?, Role::Public);
        assert_eq!("admin".parse::<Role>()?, Role::Admin);
        assert_eq!("root".parse::<Role>(), Err(UnknownRole("root".to_string())));

        Ok(())
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Public.is_admin());
    }
}
