use crate::context::Context;
use crate::prelude::{println, *};
use chrono::{DateTime, Utc};
use colored::Colorize;
use thumbtack_core::{Bookmark, PostsAllInput};

use super::print_bookmarks;

#[derive(Debug, clap::Args, Clone)]
pub struct AllOptions {
    /// Filter by tag (repeatable, up to 3)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only bookmarks created after this RFC 3339 time
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,

    /// Only bookmarks created before this RFC 3339 time
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,

    /// Number of results to return
    #[arg(long)]
    pub results: Option<u32>,

    /// Offset into the result set
    #[arg(long)]
    pub start: Option<u32>,

    /// Leave out the change detection signature
    #[arg(long)]
    pub no_meta: bool,
}

impl AllOptions {
    pub fn to_input(&self) -> PostsAllInput {
        PostsAllInput {
            from_dt: self.from,
            meta: self.no_meta.then_some(false),
            results: self.results,
            start: self.start,
            tags: self.tags.clone(),
            to_dt: self.to,
        }
    }
}

pub fn all_data(options: &AllOptions, ctx: &Context) -> Result<Vec<Bookmark>> {
    let input = options.to_input();
    ctx.call("posts all", |client| client.posts_all(&input))
}

pub fn run(options: AllOptions, ctx: &Context) -> Result<()> {
    let bookmarks = all_data(&options, ctx)?;

    if ctx.json {
        return print_json(&bookmarks);
    }

    print_bookmarks(&bookmarks);
    println!(
        "{} {}",
        bookmarks.len().to_string().bright_cyan().bold(),
        "bookmarks".bright_white()
    );
    Ok(())
}
