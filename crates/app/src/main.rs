mod seed;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Identity, UserId};
use services::{
    AppServices, CheckoutService, Clock, DashboardService, IdentityHub, QuizFlowService,
    RoleGate, ServicesConfig,
};
use storage::repository::Storage;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_DB_URL: &str = "sqlite://dev.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUserId { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid user id: {raw:?}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

fn parse_user_id(raw: String) -> Result<UserId, ArgsError> {
    UserId::new(raw.clone()).map_err(|_| ArgsError::InvalidUserId { raw })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn identity(&self) -> IdentityHub {
        self.services.identity()
    }

    fn role_gate(&self) -> Arc<RoleGate> {
        self.services.role_gate()
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        self.services.quiz_flow()
    }

    fn checkout(&self) -> Arc<CheckoutService> {
        self.services.checkout()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    /// Signed in at launch (ui) or promoted to admin (seed).
    user: Option<UserId>,
    email: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>] [--user <id>] [--email <addr>]");
    eprintln!("  cargo run -p app -- seed [--db <sqlite_url>] [--user <admin id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  QUIZ_DB_URL, QUIZ_USER_ID, QUIZ_USER_EMAIL");
    eprintln!("  QUIZ_PAYMENTS_URL, QUIZ_AUTH_TOKEN, QUIZ_SHUFFLE_QUESTIONS");
    eprintln!("  RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

impl Args {
    fn from_env() -> Result<Self, ArgsError> {
        let db_url = std::env::var("QUIZ_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let user = std::env::var("QUIZ_USER_ID")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(parse_user_id)
            .transpose()?;
        let email = std::env::var("QUIZ_USER_EMAIL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        Ok(Self { db_url, user, email })
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                "--user" => {
                    self.user = Some(parse_user_id(require_value(args, "--user")?)?);
                }
                "--email" => {
                    self.email = Some(require_value(args, "--email")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), BoxError> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::from_env()
        .and_then(|defaults| defaults.parse(&mut argv.into_iter()))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    tracing::info!(db_url = %parsed.db_url, ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let config = ServicesConfig::from_env()?;
            let services = AppServices::from_storage(&storage, &config, Clock::system());
            if let Some(user_id) = parsed.user {
                services.identity().sign_in(Identity::new(user_id, parsed.email));
            }

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz Desk")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => seed::run(&storage, parsed.user.as_ref()).await,
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), BoxError> {
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

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "quiz desk exited with an error");
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Args {
        Args {
            db_url: DEFAULT_DB_URL.into(),
            user: None,
            email: None,
        }
    }

    fn argv(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|s| (*s).to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = defaults()
            .parse(&mut argv(&["--db", "sqlite::memory:", "--user", "u1", "--email", "a@b.c"]))
            .unwrap();
        assert_eq!(parsed.db_url, "sqlite::memory:");
        assert_eq!(parsed.user.as_ref().map(UserId::as_str), Some("u1"));
        assert_eq!(parsed.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn blank_user_and_missing_values_are_rejected() {
        assert!(matches!(
            defaults().parse(&mut argv(&["--user", " "])),
            Err(ArgsError::InvalidUserId { .. })
        ));
        assert!(matches!(
            defaults().parse(&mut argv(&["--db"])),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            defaults().parse(&mut argv(&["--verbose"])),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/quiz.sqlite3".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/quiz.sqlite3"));
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
