use std::fmt;
use std::time::Duration;

use academy_core::model::{Category, LessonId, QuizId};
use clap::{Parser, Subcommand};
use services::{AppServices, ChatConfig, Clock};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_DB_URL: &str = "sqlite://academy.sqlite3";
const MEMORY_DB: &str = "memory";

#[derive(Parser)]
#[command(name = "academy", version, about = "Web development academy in the terminal")]
struct Cli {
    /// SQLite database url or path, or `memory` for a throwaway store
    #[arg(long, global = true, env = "ACADEMY_DB_URL", default_value = DEFAULT_DB_URL)]
    db: String,

    /// Pause before each chatbot reply, in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    chat_delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },

    /// Sign in with email and password, or as the demo Google user
    Login {
        #[arg(long, required_unless_present = "google")]
        email: Option<String>,
        #[arg(long, required_unless_present = "google")]
        password: Option<String>,
        #[arg(long, conflicts_with_all = ["email", "password"])]
        google: bool,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List lessons, optionally for one category (html, css, javascript)
    Lessons {
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Show one lesson
    Lesson { id: LessonId },

    /// Mark a lesson as completed
    Complete { id: LessonId },

    /// Add or remove a lesson bookmark
    Bookmark { id: LessonId },

    /// Take a quiz; prompts for answers unless `--answers` is given
    Quiz {
        id: QuizId,
        /// Comma-separated option numbers, starting at 1 (e.g. 1,3,2,3,2)
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },

    /// Ask the study assistant; starts a conversation when no message is given
    Chat { message: Vec<String> },

    /// Show overall and per-course progress
    Dashboard {
        #[arg(long)]
        json: bool,
    },

    /// List earned certificates
    Certificates,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw).ok_or_else(|| format!("unknown category: {raw}"))
}

#[derive(Debug)]
struct InvalidDbUrl {
    raw: String,
}

impl fmt::Display for InvalidDbUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid --db value: {}", self.raw)
    }
}

impl std::error::Error for InvalidDbUrl {}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_owned();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
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
        .ok_or_else(|| InvalidDbUrl {
            raw: db_url.to_owned(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(InvalidDbUrl {
            raw: db_url.to_owned(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
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

async fn open_services(cli: &Cli) -> Result<AppServices, Box<dyn std::error::Error>> {
    let chat = ChatConfig {
        response_delay: Duration::from_millis(cli.chat_delay_ms),
    };
    let clock = Clock::system();

    if cli.db.trim().is_empty() {
        return Err(InvalidDbUrl {
            raw: cli.db.clone(),
        }
        .into());
    }
    if cli.db.trim() == MEMORY_DB {
        debug!("using in-memory storage");
        return Ok(AppServices::in_memory(clock, chat)?);
    }

    // Open + migrate SQLite at startup.
    let db_url = normalize_sqlite_url(&cli.db);
    prepare_sqlite_file(&db_url)?;
    debug!(db_url, "opening sqlite storage");
    Ok(AppServices::new_sqlite(&db_url, clock, chat).await?)
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let app = open_services(&cli).await?;

    match cli.command {
        Command::Register {
            email,
            password,
            name,
        } => commands::register(&app, &email, &password, &name).await,
        Command::Login {
            email,
            password,
            google,
        } => {
            if google {
                commands::google_login(&app).await
            } else {
                commands::login(
                    &app,
                    email.as_deref().unwrap_or_default(),
                    password.as_deref().unwrap_or_default(),
                )
                .await
            }
        }
        Command::Logout => commands::logout(&app).await,
        Command::Whoami => commands::whoami(&app).await,
        Command::Lessons { category } => commands::lessons(&app, category).await,
        Command::Lesson { id } => commands::lesson(&app, &id).await,
        Command::Complete { id } => commands::complete(&app, id).await,
        Command::Bookmark { id } => commands::bookmark(&app, id).await,
        Command::Quiz { id, answers } => commands::quiz(&app, &id, answers).await,
        Command::Chat { message } => commands::chat(&app, &message.join(" ")).await,
        Command::Dashboard { json } => commands::dashboard(&app, json).await,
        Command::Certificates => commands::certificates(&app).await,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
