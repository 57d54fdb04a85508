use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::error::AppError;

// ─── GlobalRole ──────────────────────────────────────────────────────

/// Application-wide role stored on the user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalRole {
    #[serde(rename = "SUPERADMIN")]
    SuperAdmin,
    Customer,
    User,
}

impl GlobalRole {
    /// Canonical string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalRole::SuperAdmin => "SUPERADMIN",
            GlobalRole::Customer => "CUSTOMER",
            GlobalRole::User => "USER",
        }
    }
}

impl fmt::Display for GlobalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUPERADMIN" | "SUPER_ADMIN" => Ok(GlobalRole::SuperAdmin),
            "CUSTOMER" => Ok(GlobalRole::Customer),
            "USER" => Ok(GlobalRole::User),
            _ => Err(AppError::Internal(format!("Unknown global role: {}", s))),
        }
    }
}

// ─── MembershipRole ──────────────────────────────────────────────────

/// Role a user holds inside one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipRole {
    Owner,
    Admin,
    User,
}

impl MembershipRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipRole::Owner => "OWNER",
            MembershipRole::Admin => "ADMIN",
            MembershipRole::User => "USER",
        }
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OWNER" => Ok(MembershipRole::Owner),
            "ADMIN" => Ok(MembershipRole::Admin),
            "USER" => Ok(MembershipRole::User),
            _ => Err(AppError::Internal(format!("Unknown membership role: {}", s))),
        }
    }
}
