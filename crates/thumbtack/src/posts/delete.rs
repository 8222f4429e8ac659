use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::ApiResult;

#[derive(Debug, clap::Args, Clone)]
pub struct DeleteOptions {
    /// URL of the bookmark to delete
    #[arg(long)]
    pub url: String,
}

pub fn delete_data(options: &DeleteOptions, ctx: &Context) -> Result<ApiResult> {
    ctx.call("posts delete", |client| client.posts_delete(&options.url))
}

pub fn run(options: DeleteOptions, ctx: &Context) -> Result<()> {
    let result = delete_data(&options, ctx)?;

    if ctx.json {
        return print_json(&result);
    }

    println!("{} {}", "Deleted".green().bold(), options.url.cyan());
    Ok(())
}
