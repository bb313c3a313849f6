//! User and admin management models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered end user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Body of the user status endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub is_active: bool,
}

/// User statistics computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    #[serde(default)]
    pub new_users_this_month: u64,
}

impl UserStats {
    pub fn inactive_users(&self) -> u64 {
        self.total_users.saturating_sub(self.active_users)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AdminRole {
    #[default]
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::SuperAdmin => "superAdmin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: AdminRole,
}

/// Input model for creating an admin
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: AdminRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            r#""superAdmin""#
        );
        let admin: Admin =
            serde_json::from_str(r#"{"id":"1","username":"root","email":"root@example.com"}"#)
                .unwrap();
        assert_eq!(admin.role, AdminRole::Admin);
    }

    #[test]
    fn test_inactive_users() {
        let stats = UserStats {
            total_users: 10,
            active_users: 7,
            new_users_this_month: 2,
        };
        assert_eq!(stats.inactive_users(), 3);
    }
}
