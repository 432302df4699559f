use clap::Parser;
use colored::*;
use console::Term;
use directories::ProjectDirs;
use rollbook::auth::AuthService;
use rollbook::config::RollbookConfig;
use rollbook::error::{Result, RollbookError};
use rollbook::model::{Student, User};
use rollbook::repo::StudentRepository;
use rollbook::stats::Statistics;
use rollbook::store::json::JsonStore;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, StudentFields};

const DATA_DIR_ENV: &str = "ROLLBOOK_DATA";
const LOG_LEVEL_ENV: &str = "ROLLBOOK_LOG";

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    auth: AuthService<JsonStore>,
    students: StudentRepository<JsonStore>,
    config: RollbookConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    let (username, password) = credentials(&cli)?;
    if !ctx.auth.login(&username, &password) {
        return Err(RollbookError::Command(
            "Invalid username or password".into(),
        ));
    }

    match cli.command {
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Update { id, fields }) => handle_update(&mut ctx, id, fields),
        Some(Commands::Remove { id, yes }) => handle_remove(&mut ctx, id, yes),
    }
}

fn init_logging() {
    let log_cfg = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("rollbook")
        .build();
    // Stderr keeps log lines out of the table output.
    let _ = TermLogger::init(
        log_level_from_env(),
        log_cfg,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn log_level_from_env() -> LevelFilter {
    let mut level_string = match std::env::var(LOG_LEVEL_ENV) {
        Err(_) => return LevelFilter::Warn,
        Ok(s) => s,
    };

    level_string.make_ascii_lowercase();
    match level_string.as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    log::debug!("data dir: {}", data_dir.display());

    let config = RollbookConfig::load(&data_dir).unwrap_or_default();
    let auth = AuthService::new(JsonStore::new(&data_dir));
    let students = StudentRepository::new(JsonStore::new(&data_dir));

    Ok(AppContext {
        auth,
        students,
        config,
    })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let proj_dirs =
        ProjectDirs::from("com", "rollbook", "rollbook").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

/// Credentials from the flags, falling back to interactive prompts.
/// The password prompt never echoes.
fn credentials(cli: &Cli) -> Result<(String, String)> {
    let term = Term::stderr();

    let username = match &cli.username {
        Some(u) => u.trim().to_string(),
        None => {
            term.write_str("Username: ")?;
            term.read_line()?.trim().to_string()
        }
    };
    let password = match &cli.password {
        Some(p) => p.trim().to_string(),
        None => {
            term.write_str("Password: ")?;
            term.read_secure_line()?.trim().to_string()
        }
    };

    if username.is_empty() || password.is_empty() {
        return Err(RollbookError::Command(
            "Please enter both username and password".into(),
        ));
    }
    Ok((username, password))
}

fn current_user(ctx: &AppContext) -> Result<&User> {
    ctx.auth
        .current_user()
        .ok_or_else(|| RollbookError::Command("Not logged in".into()))
}

fn require_admin(ctx: &AppContext) -> Result<()> {
    if ctx.auth.is_admin() {
        return Ok(());
    }
    Err(RollbookError::Command(
        "Student management requires the admin role".into(),
    ))
}

fn check_department(config: &RollbookConfig, department: &str) -> Result<()> {
    if config.is_known_department(department) {
        return Ok(());
    }
    Err(RollbookError::Command(format!(
        "Unknown department: {} (expected one of: {})",
        department,
        config.departments.join(", ")
    )))
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let user = current_user(ctx)?;
    println!("Welcome, {} ({})", user.username.bold(), user.role);

    let stats = ctx.students.statistics();
    println!();
    println!("Total students:     {}", stats.total.to_string().bold());
    println!(
        "Average GPA:        {}",
        format!("{:.2}", stats.average_gpa).bold()
    );
    println!(
        "Recent enrollments: {}",
        stats.recent_enrollments.to_string().bold()
    );
    print_department_chart(&stats);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    require_admin(ctx)?;
    let students = match search {
        Some(term) => ctx.students.search(&term),
        None => ctx.students.all().to_vec(),
    };
    print_students(&students);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: StudentFields) -> Result<()> {
    require_admin(ctx)?;
    let candidate = fields.into_student();
    check_department(&ctx.config, &candidate.department)?;
    ctx.students.add(candidate)?;
    println!("{}", "Student added.".green());
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: String, fields: StudentFields) -> Result<()> {
    require_admin(ctx)?;
    let candidate = fields.into_student();
    check_department(&ctx.config, &candidate.department)?;
    ctx.students.update(&id, candidate)?;
    println!("{}", "Student updated.".green());
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    require_admin(ctx)?;
    if !yes {
        let student = ctx
            .students
            .get(&id)
            .ok_or_else(|| RollbookError::NotFound(id.clone()))?;
        let prompt = format!("Delete {} ({})? [y/N] ", student.full_name(), id);

        let term = Term::stderr();
        term.write_str(&prompt)?;
        let answer = term.read_line()?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }
    let removed = ctx.students.remove(&id)?;
    println!("{}", format!("Removed {}.", removed.full_name()).green());
    Ok(())
}

const CHART_WIDTH: usize = 30;

fn print_department_chart(stats: &Statistics) {
    if stats.by_department.is_empty() {
        return;
    }

    let name_width = stats
        .by_department
        .keys()
        .map(|d| d.width())
        .max()
        .unwrap_or(0);
    let max_count = stats.by_department.values().copied().max().unwrap_or(1);

    println!();
    println!("{}", "Students by department".bold());
    for (dept, count) in &stats.by_department {
        let bar_len = (count * CHART_WIDTH).div_ceil(max_count);
        let padding = " ".repeat(name_width.saturating_sub(dept.width()));
        println!(
            "  {}{}  {} {}",
            dept,
            padding,
            "█".repeat(bar_len).cyan(),
            count
        );
    }
}

fn print_students(students: &[Student]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let id_width = column_width("ID", students.iter().map(|s| s.student_id.as_str()));
    let name_width = {
        let widest = students
            .iter()
            .map(|s| s.full_name().width())
            .max()
            .unwrap_or(0);
        widest.max("Name".width())
    };
    let dept_width = column_width("Department", students.iter().map(|s| s.department.as_str()));

    println!(
        "{}  {}  {}  {}",
        pad("ID", id_width).bold(),
        pad("Name", name_width).bold(),
        pad("Department", dept_width).bold(),
        "GPA".bold()
    );
    for s in students {
        println!(
            "{}  {}  {}  {:.2}",
            pad(&s.student_id, id_width),
            pad(&s.full_name(), name_width),
            pad(&s.department, dept_width),
            s.gpa
        );
    }
    println!();
    println!("{}", format!("{} student(s)", students.len()).dimmed());
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.width())
        .max()
        .unwrap_or(0)
        .max(header.width())
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
