use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::Dates;

#[derive(Debug, clap::Args, Clone)]
pub struct DatesOptions {
    /// Filter by tag (repeatable, up to 3)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

pub fn dates_data(options: &DatesOptions, ctx: &Context) -> Result<Dates> {
    ctx.call("posts dates", |client| client.posts_dates(&options.tags))
}

pub fn run(options: DatesOptions, ctx: &Context) -> Result<()> {
    let dates = dates_data(&options, ctx)?;

    if ctx.json {
        return print_json(&dates);
    }

    if dates.dates.is_empty() {
        println!("{}", "No bookmarks.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["Date", "Bookmarks"]);
    for (date, count) in dates.dates.iter().rev() {
        table.add_row(prettytable::row![date, count]);
    }
    table.printstd();
    Ok(())
}
