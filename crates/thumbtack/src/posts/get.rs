use crate::context::Context;
use crate::prelude::{println, *};
use chrono::NaiveDate;
use colored::Colorize;
use thumbtack_core::{Posts, PostsGetInput};

use super::print_bookmarks;

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Filter by tag (repeatable, up to 3)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Day to list, as YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Return only the bookmark for this URL
    #[arg(long)]
    pub url: Option<String>,

    /// Leave out the change detection signature
    #[arg(long)]
    pub no_meta: bool,
}

impl GetOptions {
    pub fn to_input(&self) -> PostsGetInput {
        PostsGetInput {
            date: self.date,
            meta: self.no_meta.then_some(false),
            tags: self.tags.clone(),
            url: self.url.clone(),
        }
    }
}

pub fn get_data(options: &GetOptions, ctx: &Context) -> Result<Posts> {
    let input = options.to_input();
    ctx.call("posts get", |client| client.posts_get(&input))
}

pub fn run(options: GetOptions, ctx: &Context) -> Result<()> {
    let posts = get_data(&options, ctx)?;

    if ctx.json {
        return print_json(&posts);
    }

    if let Some(date) = posts.date {
        println!(
            "{} {}\n",
            posts.user.bright_cyan().bold(),
            date.format("%Y-%m-%d").to_string().bright_white()
        );
    }
    print_bookmarks(&posts.posts);
    Ok(())
}
