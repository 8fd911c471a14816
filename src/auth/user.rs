// src/auth/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Owner,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Owner => "owner",
        }
    }

    /// Anything other than "owner" is a student.
    pub fn parse(s: &str) -> UserType {
        if s.trim().eq_ignore_ascii_case("owner") {
            UserType::Owner
        } else {
            UserType::Student
        }
    }

    /// Where a freshly signed-in user lands.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserType::Student => "/dashboard",
            UserType::Owner => "/owner/dashboard",
        }
    }
}

/// The signed-in identity, persisted as JSON in the visitor's store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_owner(&self) -> bool {
        self.user_type == UserType::Owner
    }
}
