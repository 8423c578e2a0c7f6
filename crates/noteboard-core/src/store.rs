//! Note storage seam.
//!
//! The board only ever appends, lists, and deletes by id. Anything that can do
//! those three things can back it.

use crate::error::Result;
use crate::models::{Note, NoteId};

/// Storage for saved notes, keyed by [`NoteId`].
pub trait NoteStore {
    /// Append a note after every existing one.
    fn insert(&mut self, note: Note) -> Result<()>;

    /// All notes in insertion order.
    fn list(&self) -> Result<Vec<Note>>;

    /// Remove the note with `id`. Returns whether a note was removed.
    fn delete(&mut self, id: &NoteId) -> Result<bool>;

    /// Number of stored notes.
    fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Whether no notes are stored.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Volatile store; contents vanish with the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNoteStore {
    notes: Vec<Note>,
}

impl MemoryNoteStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Borrow the notes without cloning.
    #[must_use]
    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }
}

impl NoteStore for MemoryNoteStore {
    fn insert(&mut self, note: Note) -> Result<()> {
        self.notes.push(note);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn delete(&mut self, id: &NoteId) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != *id);
        Ok(self.notes.len() != before)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.notes.len())
    }
}
