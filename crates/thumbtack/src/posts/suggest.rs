use crate::context::Context;
use crate::prelude::*;
use thumbtack_core::Suggestions;

#[derive(Debug, clap::Args, Clone)]
pub struct SuggestOptions {
    /// URL to suggest tags for
    #[arg(long)]
    pub url: String,
}

pub fn suggest_data(options: &SuggestOptions, ctx: &Context) -> Result<Suggestions> {
    ctx.call("posts suggest", |client| client.posts_suggest(&options.url))
}

pub fn run(options: SuggestOptions, ctx: &Context) -> Result<()> {
    let suggestions = suggest_data(&options, ctx)?;

    if ctx.json {
        return print_json(&suggestions);
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Popular", suggestions.popular.join(" ")]);
    table.add_row(prettytable::row![
        "Recommended",
        suggestions.recommended.join(" ")
    ]);
    table.printstd();
    Ok(())
}
