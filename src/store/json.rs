use super::{default_users, RecordStore};
use crate::error::{Result, RollbookError};
use crate::model::{Student, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const USERS_FILE: &str = "users.json";
const STUDENTS_FILE: &str = "students.json";

/// File-backed store: one JSON document per collection under `data_dir`.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read_list<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let content = fs::read_to_string(self.data_dir.join(file))?;
        let list = serde_json::from_str(&content)?;
        Ok(list)
    }

    fn write_list<T: Serialize>(&self, file: &str, list: &[T]) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        let content = serde_json::to_string_pretty(list)?;
        fs::write(self.data_dir.join(file), content)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn load_users(&mut self) -> Vec<User> {
        match self.read_list(USERS_FILE) {
            Ok(users) => users,
            Err(e) => {
                match &e {
                    // First run: expected, not worth a warning.
                    RollbookError::Io(io) if io.kind() == ErrorKind::NotFound => log::info!(
                        "no users document in {}, creating default accounts",
                        self.data_dir.display()
                    ),
                    _ => log::warn!("users document unreadable ({e}), restoring default accounts"),
                }
                let defaults = default_users();
                self.save_users(&defaults);
                defaults
            }
        }
    }

    fn save_users(&mut self, users: &[User]) {
        if let Err(e) = self.write_list(USERS_FILE, users) {
            log::error!("failed to save users: {e}");
        }
    }

    fn load_students(&self) -> Vec<Student> {
        match self.read_list(STUDENTS_FILE) {
            Ok(students) => students,
            Err(e) => {
                if let RollbookError::Io(io) = &e {
                    if io.kind() == ErrorKind::NotFound {
                        return Vec::new();
                    }
                }
                log::warn!("students document unreadable ({e}), starting empty");
                Vec::new()
            }
        }
    }

    fn save_students(&mut self, students: &[Student]) {
        if let Err(e) = self.write_list(STUDENTS_FILE, students) {
            log::error!("failed to save students: {e}");
        }
    }
}
