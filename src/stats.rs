//! Roster summary figures. Pure computation; the clock is an argument
//! so callers and tests control what "recent" means.

use crate::model::Student;
use std::collections::BTreeMap;

/// How far back an enrollment year may lie and still count as recent.
const RECENT_WINDOW_YEARS: i32 = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total: usize,
    /// Mean GPA across the roster, `0.0` when there are no students.
    pub average_gpa: f64,
    /// Students enrolled within the last [`RECENT_WINDOW_YEARS`] years,
    /// current year inclusive.
    pub recent_enrollments: usize,
    /// Headcount per department, ordered by department name.
    pub by_department: BTreeMap<String, usize>,
}

pub fn compute(students: &[Student], current_year: i32) -> Statistics {
    let total = students.len();
    let average_gpa = if total == 0 {
        0.0
    } else {
        students.iter().map(|s| s.gpa).sum::<f64>() / total as f64
    };
    let recent_enrollments = students
        .iter()
        .filter(|s| s.enrollment_year >= current_year - RECENT_WINDOW_YEARS)
        .count();
    let mut by_department = BTreeMap::new();
    for student in students {
        *by_department.entry(student.department.clone()).or_insert(0) += 1;
    }
    Statistics {
        total,
        average_gpa,
        recent_enrollments,
        by_department,
    }
}
