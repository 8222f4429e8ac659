use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::Tags;

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {}

pub fn get_data(ctx: &Context) -> Result<Tags> {
    ctx.call("tags get", |client| client.tags_get())
}

pub fn run(_options: GetOptions, ctx: &Context) -> Result<()> {
    let tags = get_data(ctx)?;

    if ctx.json {
        return print_json(&tags);
    }

    if tags.tags.is_empty() {
        println!("{}", "No tags.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["Tag", "Bookmarks"]);
    for (tag, count) in &tags.tags {
        table.add_row(prettytable::row![tag, count]);
    }
    table.printstd();
    println!(
        "\n{} {}",
        tags.count.to_string().bright_cyan().bold(),
        "tags".bright_white()
    );
    Ok(())
}
