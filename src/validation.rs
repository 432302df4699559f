//! Field-level business rules for candidate student records.
//!
//! Every rule is a pure predicate over the raw candidate value; composition
//! (and the decision of which failure to report first) belongs to the
//! caller. Rules that depend on the clock take "today" / "current year" as
//! an explicit argument so they stay deterministic under test.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything before the `@`, at least one character after it. Deliberately
/// lax: the institution's records carry whatever address the student gave.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").unwrap());

/// Optional leading `+`, then ten or more digits, spaces or dashes.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").unwrap());

/// Non-blank after trimming and at least 6 characters long.
pub fn is_valid_student_id(id: &str) -> bool {
    !id.trim().is_empty() && id.chars().count() >= 6
}

/// Non-blank after trimming and at least 2 characters long.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() >= 2
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Inclusive on both bounds.
pub fn is_valid_gpa(gpa: f64) -> bool {
    (0.0..=4.0).contains(&gpa)
}

pub fn is_valid_enrollment_year(year: i32, current_year: i32) -> bool {
    year >= 2000 && year <= current_year
}

/// Whole-year age, birthday not yet reached counts as the previous year.
pub fn is_at_least_16(date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    today.years_since(date_of_birth).is_some_and(|y| y >= 16)
}
