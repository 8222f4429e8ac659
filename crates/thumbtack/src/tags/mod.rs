use crate::context::Context;
use crate::prelude::*;

pub mod delete;
pub mod get;
pub mod rename;

#[derive(Debug, clap::Parser)]
#[command(name = "tags")]
#[command(about = "Tag operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List every tag with its bookmark count
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Remove a tag from every bookmark
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),

    /// Rename a tag
    #[clap(name = "rename")]
    Rename(rename::RenameOptions),
}

pub fn run(app: App, ctx: &Context) -> Result<()> {
    match app.command {
        Commands::Get(options) => get::run(options, ctx),
        Commands::Delete(options) => delete::run(options, ctx),
        Commands::Rename(options) => rename::run(options, ctx),
    }
}
