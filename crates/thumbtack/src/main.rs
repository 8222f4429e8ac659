use crate::prelude::*;
use clap::Parser;

mod context;
mod error;
mod notes;
mod posts;
mod prelude;
mod tags;
mod transport;
mod user;

use context::Context;

pub const APP_NAME: &str = "thumbtack";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Manage Pinboard bookmarks, notes and tags from the command line"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Pinboard API token (user:HEX)
    #[clap(long, env = "THUMBTACK_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Pinboard API endpoint
    #[clap(long, env = "THUMBTACK_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// User-Agent sent with every request
    #[clap(long, env = "THUMBTACK_USERAGENT", global = true)]
    useragent: Option<String>,

    /// Log level
    #[clap(
        long,
        env = "THUMBTACK_LOGLEVEL",
        global = true,
        value_enum,
        default_value_t = LogLevel::Info
    )]
    loglevel: LogLevel,

    /// Output as JSON
    #[clap(long, env = "THUMBTACK_JSON", global = true, default_value = "false")]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Bookmark operations
    Posts(crate::posts::App),

    /// Note operations
    Notes(crate::notes::App),

    /// Tag operations
    Tags(crate::tags::App),

    /// Account operations
    User(crate::user::App),
}

/// `--token` is global, so clap cannot mark it required itself.
fn require_token(global: &Global) -> std::result::Result<(), clap::Error> {
    match global.token.as_deref() {
        Some(token) if !token.trim().is_empty() => Ok(()),
        _ => {
            use clap::CommandFactory;
            Err(App::command().error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "the following required argument was not provided: --token <TOKEN> (or THUMBTACK_TOKEN)",
            ))
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    if let Err(err) = require_token(&app.global) {
        err.exit();
    }

    let logger = context::build_logger(app.global.loglevel.into());
    let ctx = Context::new(&app.global, logger);

    match app.command {
        SubCommands::Posts(sub_app) => crate::posts::run(sub_app, &ctx),
        SubCommands::Notes(sub_app) => crate::notes::run(sub_app, &ctx),
        SubCommands::Tags(sub_app) => crate::tags::run(sub_app, &ctx),
        SubCommands::User(sub_app) => crate::user::run(sub_app, &ctx),
    }
}
