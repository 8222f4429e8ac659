use crate::context::Context;
use crate::prelude::*;
use colored::Colorize;
use thumbtack_core::Bookmark;

pub mod add;
pub mod all;
pub mod dates;
pub mod delete;
pub mod get;
pub mod recent;
pub mod suggest;
pub mod update;

#[derive(Debug, clap::Parser)]
#[command(name = "posts")]
#[command(about = "Bookmark operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Add a bookmark
    #[clap(name = "add")]
    Add(add::AddOptions),

    /// List every bookmark
    #[clap(name = "all")]
    All(all::AllOptions),

    /// Bookmark counts per day
    #[clap(name = "dates")]
    Dates(dates::DatesOptions),

    /// Delete a bookmark
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),

    /// Bookmarks for a single day or URL
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Most recent bookmarks
    #[clap(name = "recent")]
    Recent(recent::RecentOptions),

    /// Popular and recommended tags for a URL
    #[clap(name = "suggest")]
    Suggest(suggest::SuggestOptions),

    /// Time of the last change to any bookmark
    #[clap(name = "update")]
    Update(update::UpdateOptions),
}

pub fn run(app: App, ctx: &Context) -> Result<()> {
    match app.command {
        Commands::Add(options) => add::run(options, ctx),
        Commands::All(options) => all::run(options, ctx),
        Commands::Dates(options) => dates::run(options, ctx),
        Commands::Delete(options) => delete::run(options, ctx),
        Commands::Get(options) => get::run(options, ctx),
        Commands::Recent(options) => recent::run(options, ctx),
        Commands::Suggest(options) => suggest::run(options, ctx),
        Commands::Update(options) => update::run(options, ctx),
    }
}

/// Collapse a `--flag` / `--no-flag` pair into an optional boolean.
pub fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub fn format_bookmarks(bookmarks: &[Bookmark]) -> String {
    if bookmarks.is_empty() {
        return f!("{}\n", "No bookmarks.".yellow());
    }

    let mut result = String::new();
    for (index, bookmark) in bookmarks.iter().enumerate() {
        let title = if bookmark.description.is_empty() {
            "(No title)"
        } else {
            bookmark.description.as_str()
        };
        result.push_str(&f!(
            "{} {}\n",
            f!("[{}]", index + 1).yellow().bold(),
            title.bold()
        ));
        result.push_str(&f!("    {}\n", bookmark.href.cyan().underline()));

        if !bookmark.extended.is_empty() {
            result.push_str(&f!("    {}\n", bookmark.extended));
        }
        if !bookmark.tags.is_empty() {
            result.push_str(&f!("    {}\n", bookmark.tags.join(" ").bright_yellow()));
        }

        let mut details = Vec::new();
        if let Some(time) = bookmark.time {
            details.push(time.format("%Y-%m-%d %H:%M").to_string());
        }
        details.push(if bookmark.shared { "public" } else { "private" }.to_string());
        if bookmark.toread {
            details.push("unread".to_string());
        }
        result.push_str(&f!("    {}\n\n", details.join(" · ").dimmed()));
    }
    result
}

pub fn print_bookmarks(bookmarks: &[Bookmark]) {
    anstream::print!("{}", format_bookmarks(bookmarks));
}
