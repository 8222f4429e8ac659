use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::UpdateTime;

#[derive(Debug, clap::Args, Clone)]
pub struct UpdateOptions {}

pub fn update_data(ctx: &Context) -> Result<UpdateTime> {
    ctx.call("posts update", |client| client.posts_update())
}

pub fn run(_options: UpdateOptions, ctx: &Context) -> Result<()> {
    let update = update_data(ctx)?;

    if ctx.json {
        return print_json(&update);
    }

    match update.update_time {
        Some(time) => println!("{} {}", "Last update".bold(), time.to_rfc3339().cyan()),
        None => println!("{}", "No updates.".yellow()),
    }
    Ok(())
}
