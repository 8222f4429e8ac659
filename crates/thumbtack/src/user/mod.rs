use crate::context::Context;
use crate::prelude::*;

pub mod secret;

#[derive(Debug, clap::Parser)]
#[command(name = "user")]
#[command(about = "Account operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the secret RSS key
    #[clap(name = "secret")]
    Secret(secret::SecretOptions),
}

pub fn run(app: App, ctx: &Context) -> Result<()> {
    match app.command {
        Commands::Secret(options) => secret::run(options, ctx),
    }
}
