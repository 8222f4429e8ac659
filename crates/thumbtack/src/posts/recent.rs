use crate::context::Context;
use crate::prelude::*;
use thumbtack_core::{Posts, PostsRecentInput};

use super::print_bookmarks;

#[derive(Debug, clap::Args, Clone)]
pub struct RecentOptions {
    /// Number of bookmarks to return (1-100)
    #[arg(long, default_value = "15")]
    pub count: u32,

    /// Filter by tag (repeatable, up to 3)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

pub fn recent_data(options: &RecentOptions, ctx: &Context) -> Result<Posts> {
    let input = PostsRecentInput {
        count: Some(options.count),
        tags: options.tags.clone(),
    };
    ctx.call("posts recent", |client| client.posts_recent(&input))
}

pub fn run(options: RecentOptions, ctx: &Context) -> Result<()> {
    let posts = recent_data(&options, ctx)?;

    if ctx.json {
        return print_json(&posts);
    }

    print_bookmarks(&posts.posts);
    Ok(())
}
