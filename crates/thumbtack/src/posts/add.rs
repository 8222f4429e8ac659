use crate::context::Context;
use crate::prelude::{println, *};
use chrono::{DateTime, Utc};
use colored::Colorize;
use thumbtack_core::{ApiResult, PostsAddInput};

use super::tri_state;

#[derive(Debug, clap::Args, Clone)]
pub struct AddOptions {
    /// URL of the bookmark
    #[arg(long)]
    pub url: String,

    /// Title of the bookmark
    #[arg(long)]
    pub title: String,

    /// Longer description of the bookmark
    #[arg(long)]
    pub descr: Option<String>,

    /// Replace any existing bookmark with this URL
    #[arg(long, overrides_with = "no_replace")]
    pub replace: bool,

    /// Fail if a bookmark with this URL already exists
    #[arg(long, overrides_with = "replace")]
    pub no_replace: bool,

    /// Make the bookmark public
    #[arg(long, overrides_with = "no_shared")]
    pub shared: bool,

    /// Make the bookmark private
    #[arg(long, overrides_with = "shared")]
    pub no_shared: bool,

    /// Tag to apply (repeatable, up to 100)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Creation time as RFC 3339 (e.g. 2023-03-10T01:32:09Z)
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Mark the bookmark as unread
    #[arg(long, overrides_with = "no_unread")]
    pub unread: bool,

    /// Mark the bookmark as read
    #[arg(long, overrides_with = "unread")]
    pub no_unread: bool,
}

impl AddOptions {
    pub fn to_input(&self) -> PostsAddInput {
        PostsAddInput {
            url: Some(self.url.clone()),
            title: Some(self.title.clone()),
            description: self.descr.clone(),
            replace: tri_state(self.replace, self.no_replace),
            shared: tri_state(self.shared, self.no_shared),
            tags: self.tags.clone(),
            timestamp: self.timestamp,
            to_read: tri_state(self.unread, self.no_unread),
        }
    }
}

pub fn add_data(options: &AddOptions, ctx: &Context) -> Result<ApiResult> {
    let input = options.to_input();
    ctx.call("posts add", |client| client.posts_add(&input))
}

pub fn run(options: AddOptions, ctx: &Context) -> Result<()> {
    let result = add_data(&options, ctx)?;

    if ctx.json {
        return print_json(&result);
    }

    println!("{} {}", "Added".green().bold(), options.url.cyan());
    Ok(())
}
