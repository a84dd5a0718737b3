use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::ListingMode;
use services::{
    ApiConfig, AppServices, Clock, QuizService, RegistrationService, ResultService,
    StudentSession, TextbookService, UploadService,
};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};
use ui::{App, UiApp, build_app_context};

const DB_URL_ENV: &str = "QUIZZO_DB_URL";
const LISTING_MODE_ENV: &str = "QUIZZO_LISTING_MODE";
const DEFAULT_DB_URL: &str = "sqlite://quizzo.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidListingMode { raw: String },
    InvalidApiUrl(services::ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidListingMode { raw } => {
                write!(f, "invalid --listing value: {raw} (expected flat or textbooks)")
            }
            ArgsError::InvalidApiUrl(err) => write!(f, "{err}"),
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

struct DesktopApp {
    listing_mode: ListingMode,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn listing_mode(&self) -> ListingMode {
        self.listing_mode
    }

    fn session(&self) -> StudentSession {
        self.services.session()
    }

    fn registration(&self) -> Arc<RegistrationService> {
        self.services.registration()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn textbooks(&self) -> Arc<TextbookService> {
        self.services.textbooks()
    }

    fn results(&self) -> Arc<ResultService> {
        self.services.results()
    }

    fn uploads(&self) -> Arc<UploadService> {
        self.services.uploads()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    api: ApiConfig,
    listing_mode: ListingMode,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quizzo [--api <base_url>] [--db <sqlite_url>] [--listing flat|textbooks]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {}", services::config::DEFAULT_BASE_URL);
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --listing flat");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  {}, {DB_URL_ENV}, {LISTING_MODE_ENV}, RUST_LOG",
        services::config::BASE_URL_ENV
    );
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
        let mut db_url = std::env::var(DB_URL_ENV)
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut api = ApiConfig::from_env().map_err(ArgsError::InvalidApiUrl)?;
        let mut listing_mode = match std::env::var(LISTING_MODE_ENV) {
            Ok(raw) => parse_listing_mode(raw)?,
            Err(_) => ListingMode::default(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--api" => {
                    let value = require_value(args, "--api")?;
                    api = ApiConfig::new(&value).map_err(ArgsError::InvalidApiUrl)?;
                }
                "--listing" => {
                    let value = require_value(args, "--listing")?;
                    listing_mode = parse_listing_mode(value)?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            db_url,
            api,
            listing_mode,
        }))
    }
}

fn parse_listing_mode(raw: String) -> Result<ListingMode, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidListingMode { raw })
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

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();
    tracing::info!(
        api = parsed.api.base_url(),
        db = %parsed.db_url,
        listing = %parsed.listing_mode,
        "starting quizzo"
    );

    // Open + migrate SQLite at startup. Keep this in the binary glue so services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services =
        AppServices::new_sqlite(&parsed.db_url, parsed.api, Clock::default_clock()).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        listing_mode: parsed.listing_mode,
        services,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quizzo")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
