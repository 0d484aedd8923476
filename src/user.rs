//! User Role and Status
//!
//! The role/ban lookup returned by `GET /api/user/role`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Maintenance,
    /// General campus user. Unknown role strings fall back here.
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Maintenance => "maintenance",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "maintenance" => Ok(Role::Maintenance),
            "user" => Ok(Role::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Role and ban flag of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    pub role: Role,
    #[serde(default)]
    pub banned: bool,
}

impl UserStatus {
    pub fn new(role: Role) -> Self {
        Self { role, banned: false }
    }

    pub fn banned(mut self) -> Self {
        self.banned = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialize() {
        let status: UserStatus =
            serde_json::from_str(r#"{"role":"maintenance","banned":true}"#).unwrap();
        assert_eq!(status.role, Role::Maintenance);
        assert!(status.banned);
    }

    #[test]
    fn test_missing_banned_defaults_false() {
        let status: UserStatus = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert_eq!(status, UserStatus::new(Role::Admin));
    }

    #[test]
    fn test_unknown_role_is_user() {
        let status: UserStatus = serde_json::from_str(r#"{"role":"student"}"#).unwrap();
        assert_eq!(status.role, Role::User);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("janitor".parse::<Role>().is_err());
    }
}
