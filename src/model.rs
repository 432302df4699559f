use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recognized access levels.
///
/// The persisted `role` field stays a free-form string (see [`User::role`]);
/// anything that is not exactly `"admin"` maps to `User` and is never
/// granted admin capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// A login account. Credentials are stored and compared in plaintext; the
/// store is a local file owned by the institution, not a hardened secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl User {
    pub fn new(username: &str, password: &str, role: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        if self.role == "admin" {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// A student record. `student_id` is the identity key; uniqueness is
/// enforced by the repository, not by the store.
///
/// Field names serialize in camelCase to match the on-disk documents, and
/// `date_of_birth` round-trips as an ISO-8601 `YYYY-MM-DD` string (chrono's
/// serde encoding for `NaiveDate`). Any other date format fails the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub gpa: f64,
    pub enrollment_year: i32,
}

impl Student {
    /// Space-joined first and last name. Derived, never persisted.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
