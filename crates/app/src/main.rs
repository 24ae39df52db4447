use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use quizbook_core::model::AdminCredentials;
use services::AppServices;
use storage::Storage;
use storage::sqlite::SqliteRepository;
use tracing_subscriber::EnvFilter;
use ui::{SessionConfig, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidBind { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBind { raw } => write!(f, "invalid --bind value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quizbook [serve] [--db <sqlite_url>] [--bind <addr>] [--schema <path>]");
    eprintln!("  quizbook seed    [--db <sqlite_url>] [--schema <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://quizbook.sqlite3");
    eprintln!("  --bind 127.0.0.1:3000");
    eprintln!("  --schema schema.sql");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZBOOK_DB_URL, QUIZBOOK_BIND, QUIZBOOK_SCHEMA,");
    eprintln!("  QUIZBOOK_ADMIN_USER, QUIZBOOK_ADMIN_PASSWORD,");
    eprintln!("  QUIZBOOK_SESSION_IDLE_MINUTES, QUIZBOOK_SECURE_COOKIES, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Serve,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "serve" => Some(Self::Serve),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    bind: SocketAddr,
    schema: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("QUIZBOOK_DB_URL")
            .ok()
            .map_or_else(|| normalize_sqlite_url("sqlite://quizbook.sqlite3".into()), normalize_sqlite_url);
        let mut bind = parse_bind(
            std::env::var("QUIZBOOK_BIND").unwrap_or_else(|_| "127.0.0.1:3000".into()),
        )?;
        let mut schema = std::env::var("QUIZBOOK_SCHEMA")
            .map_or_else(|_| PathBuf::from("schema.sql"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--bind" => bind = parse_bind(require_value(args, "--bind")?)?,
                "--schema" => schema = PathBuf::from(require_value(args, "--schema")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            bind,
            schema,
        })
    }
}

fn parse_bind(raw: String) -> Result<SocketAddr, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidBind { raw })
}

fn admin_credentials() -> AdminCredentials {
    let defaults = AdminCredentials::default();
    let username =
        std::env::var("QUIZBOOK_ADMIN_USER").unwrap_or_else(|_| defaults.username().to_string());
    match std::env::var("QUIZBOOK_ADMIN_PASSWORD") {
        Ok(password) => AdminCredentials::new(username, password),
        Err(_) => {
            tracing::warn!("QUIZBOOK_ADMIN_PASSWORD not set; using the built-in default password");
            AdminCredentials::new(username, "password")
        }
    }
}

fn session_config() -> SessionConfig {
    let defaults = SessionConfig::default();
    let idle_minutes = match std::env::var("QUIZBOOK_SESSION_IDLE_MINUTES") {
        Ok(raw) => parse_idle_minutes(&raw, defaults.idle_minutes),
        Err(_) => defaults.idle_minutes,
    };
    let secure_cookies = std::env::var("QUIZBOOK_SECURE_COOKIES")
        .is_ok_and(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes"));
    SessionConfig {
        idle_minutes,
        secure_cookies,
    }
}

/// Idle timeout in minutes; anything but a positive integer falls back to `default`.
fn parse_idle_minutes(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => minutes,
        _ => {
            tracing::warn!(
                value = raw,
                default,
                "invalid QUIZBOOK_SESSION_IDLE_MINUTES; using default"
            );
            default
        }
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path = Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Create the tables. A schema file on disk wins over the built-in schema.
///
/// Failures are logged and startup continues; the first query against a
/// missing table will then surface as a 500.
async fn init_schema(repo: &SqliteRepository, schema: &Path) {
    let outcome = match std::fs::read_to_string(schema) {
        Ok(script) => repo.apply_schema_script(&script).await,
        Err(err) => {
            tracing::warn!(
                path = %schema.display(),
                error = %err,
                "schema file not readable; using built-in schema"
            );
            repo.migrate().await
        }
    };
    match outcome {
        Ok(()) => tracing::info!("database initialized"),
        Err(err) => tracing::error!(error = %err, "database initialization failed"),
    }
}

async fn seed(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let students = services.students();
    let quizzes = services.quizzes();
    let results = services.results();

    let ada = students.create_student("Ada", "Lovelace").await?;
    let alan = students.create_student("Alan", "Turing").await?;
    let grace = students.create_student("Grace", "Hopper").await?;

    let jan = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid seed date")?;
    let feb = NaiveDate::from_ymd_opt(2024, 2, 5).ok_or("invalid seed date")?;
    let math = quizzes.create_quiz("Math", 10, jan).await?;
    let history = quizzes.create_quiz("History", 20, feb).await?;

    for (student, quiz, score) in [
        (ada, math, 9),
        (ada, history, 17),
        (alan, math, 10),
        (grace, history, 14),
    ] {
        results.record_result(student, quiz, score).await?;
    }

    tracing::info!("seed data inserted");
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Serve,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Serve,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let repo = SqliteRepository::connect(&parsed.db_url).await?;
    init_schema(&repo, &parsed.schema).await;

    let storage = Storage::from_sqlite(repo);
    let services = AppServices::new(&storage, admin_credentials());

    match cmd {
        Command::Serve => {
            let app: Arc<dyn UiApp> = Arc::new(services);
            let router = ui::router(build_app_context(&app), &session_config());

            let listener = tokio::net::TcpListener::bind(parsed.bind).await?;
            tracing::info!(addr = %parsed.bind, db = %parsed.db_url, "listening");
            axum::serve(listener, router).await?;
            Ok(())
        }
        Command::Seed => seed(&services).await,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
