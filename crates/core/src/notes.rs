//! `/notes/*` operations.

use crate::client::Client;
use crate::error::Error;
use crate::http::Transport;
use crate::query::required;
use crate::registry::Operation;
use crate::types::{Note, Notes};

impl<T: Transport> Client<T> {
    /// Every note in the account. Note bodies are not included.
    pub fn notes_list(&self) -> Result<Notes, Error> {
        self.call(Operation::NotesList, &self.query())
    }

    /// A single note, including its text.
    pub fn notes_by_id(&self, id: &str) -> Result<Note, Error> {
        let id = required(Some(id), "id")?;
        self.call_with_suffix(Operation::NotesById, Some(id), &self.query())
    }
}
