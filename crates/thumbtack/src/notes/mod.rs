use crate::context::Context;
use crate::prelude::*;

pub mod by_id;
pub mod list;

#[derive(Debug, clap::Parser)]
#[command(name = "notes")]
#[command(about = "Note operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List every note
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Read a single note
    #[clap(name = "by-id")]
    ById(by_id::ByIdOptions),
}

pub fn run(app: App, ctx: &Context) -> Result<()> {
    match app.command {
        Commands::List(options) => list::run(options, ctx),
        Commands::ById(options) => by_id::run(options, ctx),
    }
}

pub fn format_note_time(time: Option<chrono::NaiveDateTime>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
