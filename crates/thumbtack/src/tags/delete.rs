use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::ApiResult;

#[derive(Debug, clap::Args, Clone)]
pub struct DeleteOptions {
    /// Tag to delete
    #[arg(long)]
    pub tag: String,
}

pub fn delete_data(options: &DeleteOptions, ctx: &Context) -> Result<ApiResult> {
    ctx.call("tags delete", |client| client.tags_delete(&options.tag))
}

pub fn run(options: DeleteOptions, ctx: &Context) -> Result<()> {
    let result = delete_data(&options, ctx)?;

    if ctx.json {
        return print_json(&result);
    }

    println!("{} {}", "Deleted tag".green().bold(), options.tag.cyan());
    Ok(())
}
