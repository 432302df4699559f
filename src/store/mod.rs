//! # Record Store
//!
//! Durable load/save boundary for the two persisted collections, Users and
//! Students. The [`RecordStore`] trait keeps the services decoupled from the
//! storage medium:
//!
//! - [`json::JsonStore`]: production storage, one pretty-printed JSON
//!   document per collection (`users.json`, `students.json`) under a data
//!   directory.
//! - [`memory::MemoryStore`]: in-memory storage for tests.
//!
//! The contract is degrade-don't-propagate. Reads never fail: an absent or
//! unreadable users document yields the two default accounts (persisted on
//! the spot so the next load finds them), an unreadable students document
//! yields an empty list. Writes are fire-and-forget: a failed save is logged
//! and swallowed, so callers must treat a successful mutation as "applied in
//! memory", not as a durability guarantee.

use crate::model::{Student, User};

pub mod json;
pub mod memory;

/// Accounts synthesized when the users document is missing or unreadable.
pub fn default_users() -> Vec<User> {
    vec![
        User::new("admin", "admin123", "admin"),
        User::new("user", "user123", "user"),
    ]
}

pub trait RecordStore {
    /// Load all users, in document order. Takes `&mut self` because a
    /// failed read bootstraps and persists the default accounts.
    fn load_users(&mut self) -> Vec<User>;

    /// Overwrite the users document with the given list.
    fn save_users(&mut self, users: &[User]);

    /// Load all students, in document order; empty on any failure.
    fn load_students(&self) -> Vec<Student>;

    /// Overwrite the students document with the given list.
    fn save_students(&mut self, students: &[Student]);
}
