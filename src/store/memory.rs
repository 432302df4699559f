use super::{default_users, RecordStore};
use crate::model::{Student, User};

/// In-memory store for tests and embedding. Mirrors the bootstrap
/// behavior of [`JsonStore`](super::json::JsonStore): the first
/// `load_users` call materializes the default accounts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Option<Vec<User>>,
    students: Vec<Student>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Some(users),
            students: Vec::new(),
        }
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            users: None,
            students,
        }
    }
}

impl RecordStore for MemoryStore {
    fn load_users(&mut self) -> Vec<User> {
        self.users.get_or_insert_with(default_users).clone()
    }

    fn save_users(&mut self, users: &[User]) {
        self.users = Some(users.to_vec());
    }

    fn load_students(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn save_students(&mut self, students: &[Student]) {
        self.students = students.to_vec();
    }
}
