use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ADMIN: [&str; 4] = ["-u", "admin", "-p", "admin123"];
const USER: [&str; 4] = ["-u", "user", "-p", "user123"];

fn rollbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rollbook").unwrap();
    cmd.env("ROLLBOOK_DATA", data_dir.path())
        .env("NO_COLOR", "1");
    cmd
}

fn add_ann(data_dir: &TempDir) {
    rollbook(data_dir)
        .args(ADMIN)
        .args([
            "add",
            "--id",
            "CS100001",
            "--first",
            "Ann",
            "--last",
            "Lee",
            "--dob",
            "2004-02-29",
            "--email",
            "ann.lee@example.edu",
            "--phone",
            "555-123-4567",
            "--dept",
            "Physics",
            "--gpa",
            "3.5",
            "--year",
            "2023",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added."));
}

#[test]
fn first_run_bootstraps_accounts_and_shows_the_dashboard() {
    let dir = TempDir::new().unwrap();

    rollbook(&dir)
        .args(ADMIN)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, admin (admin)"))
        .stdout(predicate::str::contains("Total students:     0"))
        .stdout(predicate::str::contains("Average GPA:        0.00"));

    // The synthesized accounts were persisted, not just returned.
    assert!(dir.path().join("users.json").exists());
}

#[test]
fn dashboard_is_the_default_command() {
    let dir = TempDir::new().unwrap();

    rollbook(&dir)
        .args(ADMIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, admin (admin)"));
}

#[test]
fn wrong_password_is_rejected() {
    let dir = TempDir::new().unwrap();

    rollbook(&dir)
        .args(["-u", "admin", "-p", "admin124", "dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn blank_credentials_are_rejected() {
    let dir = TempDir::new().unwrap();

    rollbook(&dir)
        .args(["-u", "  ", "-p", "admin123", "dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter both username and password",
        ));
}

#[test]
fn non_admin_gets_the_dashboard_but_not_the_roster() {
    let dir = TempDir::new().unwrap();

    rollbook(&dir)
        .args(USER)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, user (user)"));

    rollbook(&dir)
        .args(USER)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires the admin role"));

    rollbook(&dir)
        .args(USER)
        .args(["remove", "CS100001", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires the admin role"));
}

#[test]
fn roster_workflow_across_separate_invocations() {
    let dir = TempDir::new().unwrap();
    add_ann(&dir);
    assert!(dir.path().join("students.json").exists());

    // The record survives into the next process.
    rollbook(&dir)
        .args(ADMIN)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CS100001"))
        .stdout(predicate::str::contains("Ann Lee"))
        .stdout(predicate::str::contains("3.50"))
        .stdout(predicate::str::contains("1 student(s)"));

    // Search matches department fragments case-insensitively.
    rollbook(&dir)
        .args(ADMIN)
        .args(["search", "phy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee"));

    rollbook(&dir)
        .args(ADMIN)
        .args(["list", "--search", "zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));

    // Same ID again is refused.
    rollbook(&dir)
        .args(ADMIN)
        .args([
            "add",
            "--id",
            "CS100001",
            "--first",
            "Bob",
            "--last",
            "Chan",
            "--dob",
            "2003-07-01",
            "--email",
            "bob.chan@example.edu",
            "--phone",
            "555-987-6543",
            "--dept",
            "Mathematics",
            "--gpa",
            "3.0",
            "--year",
            "2022",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Student ID already exists: CS100001",
        ));

    // Update keeps the ID and rewrites the rest.
    rollbook(&dir)
        .args(ADMIN)
        .args([
            "update",
            "CS100001",
            "--id",
            "CS100001",
            "--first",
            "Ann",
            "--last",
            "Lee",
            "--dob",
            "2004-02-29",
            "--email",
            "ann.lee@example.edu",
            "--phone",
            "555-123-4567",
            "--dept",
            "Physics",
            "--gpa",
            "3.9",
            "--year",
            "2023",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated."));

    rollbook(&dir)
        .args(ADMIN)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.90"));

    rollbook(&dir)
        .args(ADMIN)
        .args(["remove", "CS100001", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Ann Lee."));

    rollbook(&dir)
        .args(ADMIN)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn dashboard_reflects_the_roster() {
    let dir = TempDir::new().unwrap();
    add_ann(&dir);

    rollbook(&dir)
        .args(ADMIN)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total students:     1"))
        .stdout(predicate::str::contains("Average GPA:        3.50"))
        .stdout(predicate::str::contains("Students by department"))
        .stdout(predicate::str::contains("Physics"));
}

#[test]
fn validation_failures_surface_as_errors() {
    let dir = TempDir::new().unwrap();

    // Too young.
    let dob = chrono::Local::now()
        .date_naive()
        .checked_sub_months(chrono::Months::new(12 * 10))
        .unwrap()
        .to_string();
    rollbook(&dir)
        .args(ADMIN)
        .args([
            "add",
            "--id",
            "CS100002",
            "--first",
            "Kid",
            "--last",
            "Lee",
            "--dob",
            &dob,
            "--email",
            "kid.lee@example.edu",
            "--phone",
            "555-123-4567",
            "--dept",
            "Physics",
            "--gpa",
            "3.5",
            "--year",
            "2023",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 16 years old"));

    // Department outside the configured list.
    rollbook(&dir)
        .args(ADMIN)
        .args([
            "add",
            "--id",
            "CS100003",
            "--first",
            "Ann",
            "--last",
            "Lee",
            "--dob",
            "2004-02-29",
            "--email",
            "ann.lee@example.edu",
            "--phone",
            "555-123-4567",
            "--dept",
            "Astrology",
            "--gpa",
            "3.5",
            "--year",
            "2023",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown department: Astrology"));

    // Malformed date never reaches the repository; clap rejects it.
    rollbook(&dir)
        .args(ADMIN)
        .args([
            "add",
            "--id",
            "CS100004",
            "--first",
            "Ann",
            "--last",
            "Lee",
            "--dob",
            "29/02/2004",
            "--email",
            "ann.lee@example.edu",
            "--phone",
            "555-123-4567",
            "--dept",
            "Physics",
            "--gpa",
            "3.5",
            "--year",
            "2023",
        ])
        .assert()
        .failure();

    // Nothing was written.
    rollbook(&dir)
        .args(ADMIN)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn removing_a_missing_student_fails() {
    let dir = TempDir::new().unwrap();

    rollbook(&dir)
        .args(ADMIN)
        .args(["remove", "ZZ999999", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: ZZ999999"));
}
