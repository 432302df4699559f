use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rollbook::model::Student;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Student roster manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Account username (prompted for when omitted)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Account password (prompted for when omitted)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Directory holding the data files (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Roster totals, average GPA and department headcounts (the default)
    #[command(alias = "stats")]
    Dashboard,

    /// List students, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search students (dedicated command)
    Search { term: String },

    /// Add a student to the roster
    Add {
        #[command(flatten)]
        fields: StudentFields,
    },

    /// Update the student with the given ID
    Update {
        /// ID of the record to replace
        id: String,

        #[command(flatten)]
        fields: StudentFields,
    },

    /// Remove the student with the given ID
    #[command(alias = "rm")]
    Remove {
        /// Student ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// The full set of student fields, shared by `add` and `update`.
#[derive(Args, Debug)]
pub struct StudentFields {
    /// Student ID (at least 6 characters)
    #[arg(long = "id")]
    pub student_id: String,

    /// First name
    #[arg(long)]
    pub first: String,

    /// Last name
    #[arg(long)]
    pub last: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: NaiveDate,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Department (must be one of the configured list)
    #[arg(long = "dept")]
    pub department: String,

    /// Grade point average, 0.0 to 4.0
    #[arg(long)]
    pub gpa: f64,

    /// Enrollment year
    #[arg(long)]
    pub year: i32,
}

impl StudentFields {
    /// Builds the candidate record, trimming the free-text fields.
    pub fn into_student(self) -> Student {
        Student {
            student_id: self.student_id.trim().to_string(),
            first_name: self.first.trim().to_string(),
            last_name: self.last.trim().to_string(),
            date_of_birth: self.dob,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            department: self.department.trim().to_string(),
            gpa: self.gpa,
            enrollment_year: self.year,
        }
    }
}
