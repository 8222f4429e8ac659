use crate::context::Context;
use crate::prelude::{println, *};
use colored::Colorize;
use thumbtack_core::Note;

use super::format_note_time;

#[derive(Debug, clap::Args, Clone)]
pub struct ByIdOptions {
    /// Note ID, as shown by `thumbtack notes list`
    #[arg(long)]
    pub id: String,
}

pub fn by_id_data(options: &ByIdOptions, ctx: &Context) -> Result<Note> {
    ctx.call("notes by-id", |client| client.notes_by_id(&options.id))
}

pub fn run(options: ByIdOptions, ctx: &Context) -> Result<()> {
    let note = by_id_data(&options, ctx)?;

    if ctx.json {
        return print_json(&note);
    }

    println!("{}\n", note.title.bright_cyan().bold());

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", note.id]);
    table.add_row(prettytable::row!["Hash", note.hash]);
    table.add_row(prettytable::row!["Length", note.length]);
    table.add_row(prettytable::row!["Created", format_note_time(note.created_at)]);
    table.add_row(prettytable::row!["Updated", format_note_time(note.updated_at)]);
    table.printstd();

    println!("\n{}", note.text);
    Ok(())
}
