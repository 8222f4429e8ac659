use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::Notes;

use super::format_note_time;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {}

pub fn list_data(ctx: &Context) -> Result<Notes> {
    ctx.call("notes list", |client| client.notes_list())
}

pub fn run(_options: ListOptions, ctx: &Context) -> Result<()> {
    let notes = list_data(ctx)?;

    if ctx.json {
        return print_json(&notes);
    }

    if notes.notes.is_empty() {
        println!("{}", "No notes.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["ID", "Title", "Length", "Updated"]);
    for note in &notes.notes {
        table.add_row(prettytable::row![
            note.id,
            note.title,
            note.length,
            format_note_time(note.updated_at)
        ]);
    }
    table.printstd();
    println!(
        "\n{} {}",
        notes.count.to_string().bright_cyan().bold(),
        "notes".bright_white()
    );
    Ok(())
}
