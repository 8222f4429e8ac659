use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::{ApiResult, TagsRenameInput};

#[derive(Debug, clap::Args, Clone)]
pub struct RenameOptions {
    /// Current tag name (case-insensitive)
    #[arg(long)]
    pub old: String,

    /// New tag name
    #[arg(long)]
    pub new: String,
}

pub fn rename_data(options: &RenameOptions, ctx: &Context) -> Result<ApiResult> {
    let input = TagsRenameInput::new(options.old.as_str(), options.new.as_str());
    ctx.call("tags rename", |client| client.tags_rename(&input))
}

pub fn run(options: RenameOptions, ctx: &Context) -> Result<()> {
    let result = rename_data(&options, ctx)?;

    if ctx.json {
        return print_json(&result);
    }

    println!(
        "{} {} -> {}",
        "Renamed".green().bold(),
        options.old.cyan(),
        options.new.cyan()
    );
    Ok(())
}
