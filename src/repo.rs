//! The student roster and its business rules.
//!
//! `StudentRepository` owns the working collection. Every successful
//! mutation rewrites the whole collection through the store, so the
//! document on disk always reflects the last accepted operation.

use crate::error::{Result, RollbookError};
use crate::model::Student;
use crate::stats::{self, Statistics};
use crate::store::RecordStore;
use crate::validation;
use chrono::{Datelike, Local};

pub struct StudentRepository<S: RecordStore> {
    pub(crate) store: S,
    students: Vec<Student>,
}

impl<S: RecordStore> StudentRepository<S> {
    pub fn new(store: S) -> Self {
        let students = store.load_students();
        Self { store, students }
    }

    /// Drops the working collection and re-reads it from the store.
    pub fn reload(&mut self) {
        self.students = self.store.load_students();
    }

    /// The full roster in insertion order.
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// Validates the candidate, rejects a taken ID, then appends and
    /// persists. Nothing changes when any check fails.
    pub fn add(&mut self, candidate: Student) -> Result<()> {
        validate(&candidate)?;
        if self.get(&candidate.student_id).is_some() {
            return Err(RollbookError::DuplicateId(candidate.student_id));
        }
        self.students.push(candidate);
        self.store.save_students(&self.students);
        Ok(())
    }

    /// Replaces the record currently holding `student_id` with `candidate`,
    /// keeping its position in the roster. The candidate may carry a new ID
    /// as long as no other record already uses it.
    pub fn update(&mut self, student_id: &str, candidate: Student) -> Result<()> {
        let pos = self.position(student_id)?;
        validate(&candidate)?;
        if candidate.student_id != student_id && self.get(&candidate.student_id).is_some() {
            return Err(RollbookError::DuplicateId(candidate.student_id));
        }
        self.students[pos] = candidate;
        self.store.save_students(&self.students);
        Ok(())
    }

    /// Removes and returns the record holding `student_id`.
    pub fn remove(&mut self, student_id: &str) -> Result<Student> {
        let pos = self.position(student_id)?;
        let removed = self.students.remove(pos);
        self.store.save_students(&self.students);
        Ok(removed)
    }

    /// Case-insensitive substring match over ID, first name, last name,
    /// email and department. A blank query returns the full roster.
    pub fn search(&self, query: &str) -> Vec<Student> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.students.clone();
        }
        self.students
            .iter()
            .filter(|s| {
                s.student_id.to_lowercase().contains(&needle)
                    || s.first_name.to_lowercase().contains(&needle)
                    || s.last_name.to_lowercase().contains(&needle)
                    || s.email.to_lowercase().contains(&needle)
                    || s.department.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        stats::compute(&self.students, Local::now().year())
    }

    fn position(&self, student_id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| RollbookError::NotFound(student_id.to_string()))
    }
}

/// All business rules in order; the error names the first failing field.
fn validate(candidate: &Student) -> Result<()> {
    let today = Local::now().date_naive();
    if !validation::is_valid_student_id(&candidate.student_id) {
        return Err(RollbookError::invalid(
            "student ID",
            "must be at least 6 characters",
        ));
    }
    if !validation::is_valid_name(&candidate.first_name) {
        return Err(RollbookError::invalid(
            "first name",
            "must be at least 2 characters",
        ));
    }
    if !validation::is_valid_name(&candidate.last_name) {
        return Err(RollbookError::invalid(
            "last name",
            "must be at least 2 characters",
        ));
    }
    if !validation::is_at_least_16(candidate.date_of_birth, today) {
        return Err(RollbookError::invalid(
            "date of birth",
            "student must be at least 16 years old",
        ));
    }
    if !validation::is_valid_email(&candidate.email) {
        return Err(RollbookError::invalid(
            "email",
            "not a valid email address",
        ));
    }
    if !validation::is_valid_phone(&candidate.phone) {
        return Err(RollbookError::invalid(
            "phone",
            "must be at least 10 digits, spaces or dashes",
        ));
    }
    if !validation::is_valid_gpa(candidate.gpa) {
        return Err(RollbookError::invalid(
            "GPA",
            "must be between 0.0 and 4.0",
        ));
    }
    if !validation::is_valid_enrollment_year(candidate.enrollment_year, today.year()) {
        return Err(RollbookError::invalid(
            "enrollment year",
            format!("must be between 2000 and {}", today.year()),
        ));
    }
    Ok(())
}
